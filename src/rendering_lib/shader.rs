// src/rendering_lib/shader.rs

pub const WGSL_SHADER_SOURCE: &str = r#"
struct SceneUniforms {
    view_proj: mat4x4<f32>,
    camera_pos: vec4<f32>,
    light_dir: vec4<f32>, // xyz: direction towards the light, w: intensity
    ambient: vec4<f32>,   // rgb: color, a: intensity
}

@group(0) @binding(0)
var<uniform> scene: SceneUniforms;

struct VertexInput {
    @location(0) position: vec3<f32>, // World space
    @location(1) normal: vec3<f32>,
    @location(2) color: vec4<f32>,
    @location(3) material: vec2<f32>, // x: lit flag, y: shininess
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) color: vec4<f32>,
    @location(3) material: vec2<f32>,
}

@vertex
fn vs_main(model: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = scene.view_proj * vec4<f32>(model.position, 1.0);
    out.world_position = model.position;
    out.normal = model.normal;
    out.color = model.color;
    out.material = model.material;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    // Markings are flat shaded.
    if (in.material.x < 0.5) {
        return in.color;
    }

    let n = normalize(in.normal);
    let l = normalize(scene.light_dir.xyz);
    let v = normalize(scene.camera_pos.xyz - in.world_position);
    let h = normalize(l + v);

    let ambient = scene.ambient.rgb * scene.ambient.a;
    let diffuse = max(dot(n, l), 0.0) * scene.light_dir.w;
    var specular = 0.0;
    if (diffuse > 0.0) {
        specular = pow(max(dot(n, h), 0.0), max(in.material.y, 1.0)) * scene.light_dir.w * 0.07;
    }

    let rgb = in.color.rgb * (ambient + vec3<f32>(diffuse)) + vec3<f32>(specular);
    return vec4<f32>(rgb, in.color.a);
}
"#;
