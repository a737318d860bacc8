use anyhow::Context;
use meshpick_mesh::IndexedMesh;
use wgpu::util::DeviceExt;
use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::{Fullscreen, Window, WindowBuilder},
};

mod camera;
mod config;
mod scene;
mod ui;

pub use config::{ViewerConfig, DEFAULT_MODEL_PATH};

use camera::{Camera, CameraController, CameraUniform};
use scene::Vertex;
use ui::PanelState;

pub const CAMERA_UNIFORM_BINDING: u32 = 0;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// A vertex buffer along with the number of vertices to draw from it.
struct DrawBuffer {
    buffer: wgpu::Buffer,
    count: u32,
}

impl DrawBuffer {
    fn new(device: &wgpu::Device, label: &str, vertices: &[Vertex]) -> Self {
        Self {
            buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(vertices),
                usage: wgpu::BufferUsages::VERTEX,
            }),
            count: vertices.len() as u32,
        }
    }
}

fn create_depth_view(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width: config.width,
            height: config.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

fn create_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    topology: wgpu::PrimitiveTopology,
    depth_bias: wgpu::DepthBiasState,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(&format!("{:?} Pipeline", topology)),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: "vs_main",
            buffers: &[Vertex::desc()],
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: "fs_main",
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            // Highlighted triangles are visible from both sides.
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::LessEqual,
            stencil: wgpu::StencilState::default(),
            bias: depth_bias,
        }),
        multisample: wgpu::MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        multiview: None,
    })
}

struct State {
    surface: wgpu::Surface,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    window: Window,
    depth_view: wgpu::TextureView,
    line_pipeline: wgpu::RenderPipeline,
    fill_pipeline: wgpu::RenderPipeline,
    mesh: IndexedMesh,
    mesh_vertex_buffer: wgpu::Buffer,
    wireframe_index_buffer: wgpu::Buffer,
    num_wireframe_indices: u32,
    grid: DrawBuffer,
    selection: Option<DrawBuffer>,
    camera: Camera,
    camera_uniform: CameraUniform,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    camera_controller: CameraController,
    panel: PanelState,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl State {
    // Creating some of the wgpu types requires async code
    async fn new(
        window: Window,
        event_loop: &EventLoopWindowTarget<()>,
        mesh: IndexedMesh,
        viewer_config: &ViewerConfig,
    ) -> anyhow::Result<Self> {
        let size = window.inner_size();

        // The instance is a handle to our GPU
        // Backends::all => Vulkan + Metal + DX12 + Browser WebGPU
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            dx12_shader_compiler: Default::default(),
        });

        // # Safety
        //
        // The surface needs to live as long as the window that created it.
        // State owns the window so this should be safe.
        let surface = unsafe { instance.create_surface(&window) }?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no compatible graphics adapter")?;
        log::info!("using adapter {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    features: wgpu::Features::empty(),
                    limits: wgpu::Limits::default(),
                    label: None,
                },
                None, // Trace path
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        // The scene colours are linear, so prefer an sRGB surface and let the hardware do
        // the conversion.
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .context("surface reports no texture formats")?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        let depth_view = create_depth_view(&device, &config);

        let camera = Camera::framing(
            mesh.bounds(),
            config.width as f32 / config.height as f32,
            viewer_config.distance,
        );

        // Create the uniform buffer containing the camera's view projection
        // matrix.
        let mut camera_uniform = CameraUniform::new();
        camera_uniform.update_view_proj(&camera);
        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[camera_uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        // The bind group is how we can identify this buffer within our shader.
        //
        // Ex:
        //     @group(0) @binding(0)
        //     var<uniform> camera: CameraUniform;
        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: CAMERA_UNIFORM_BINDING,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
                label: Some("camera_bind_group_layout"),
            });
        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: CAMERA_UNIFORM_BINDING,
                resource: camera_buffer.as_entire_binding(),
            }],
            label: Some("camera_bind_group"),
        });

        let render_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Render Pipeline Layout"),
                bind_group_layouts: &[/* bind_group = 0 */ &camera_bind_group_layout],
                push_constant_ranges: &[],
            });

        // The grid and the wireframe are line lists; highlighted triangles are filled and
        // pushed back slightly so the wireframe drawn on top of them stays visible.
        let shader = device.create_shader_module(wgpu::include_wgsl!("scene.wgsl"));
        let line_pipeline = create_pipeline(
            &device,
            &render_pipeline_layout,
            &shader,
            config.format,
            wgpu::PrimitiveTopology::LineList,
            wgpu::DepthBiasState::default(),
        );
        let fill_pipeline = create_pipeline(
            &device,
            &render_pipeline_layout,
            &shader,
            config.format,
            wgpu::PrimitiveTopology::TriangleList,
            wgpu::DepthBiasState {
                constant: 2,
                slope_scale: 1.0,
                clamp: 0.0,
            },
        );

        let mesh_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Vertex Buffer"),
            contents: bytemuck::cast_slice(&scene::mesh_vertices(&mesh, scene::WIREFRAME_COLOR)),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let wireframe_indices = scene::wireframe_indices(&mesh);
        let wireframe_index_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Wireframe Index Buffer"),
                contents: bytemuck::cast_slice(&wireframe_indices),
                usage: wgpu::BufferUsages::INDEX,
            });
        let grid = DrawBuffer::new(&device, "Grid Vertex Buffer", &scene::grid_vertices(&mesh));

        let egui_ctx = egui::Context::default();
        let mut egui_state = egui_winit::State::new(event_loop);
        egui_state.set_pixels_per_point(window.scale_factor() as f32);
        egui_state.set_max_texture_side(device.limits().max_texture_dimension_2d as usize);
        let egui_renderer = egui_wgpu::Renderer::new(&device, config.format, None, 1);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            size,
            depth_view,
            line_pipeline,
            fill_pipeline,
            mesh,
            mesh_vertex_buffer,
            wireframe_index_buffer,
            num_wireframe_indices: wireframe_indices.len() as u32,
            grid,
            selection: None,
            camera,
            camera_uniform,
            camera_buffer,
            camera_bind_group,
            camera_controller: CameraController::new(0.005, 0.1),
            panel: PanelState::new(viewer_config),
            egui_ctx,
            egui_state,
            egui_renderer,
        })
    }

    fn handle_window_event(&mut self, window_event: WindowEvent, control_flow: &mut ControlFlow) {
        let response = self.egui_state.on_event(&self.egui_ctx, &window_event);
        // Button releases always reach the camera so a drag that ends over the panel stops.
        let is_release = matches!(
            window_event,
            WindowEvent::MouseInput {
                state: ElementState::Released,
                ..
            }
        );
        if response.consumed && !is_release {
            return;
        }
        if self.input(&window_event) {
            return;
        }
        match window_event {
            WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
            WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state: ElementState::Pressed,
                        virtual_keycode: Some(keycode),
                        ..
                    },
                ..
            } => match keycode {
                VirtualKeyCode::Escape => *control_flow = ControlFlow::Exit,
                VirtualKeyCode::F => self.toggle_fullscreen(),
                VirtualKeyCode::H => self.panel.visible = !self.panel.visible,
                _ => {}
            },
            WindowEvent::Resized(physical_size) => {
                self.resize(physical_size);
            }
            WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                // new_inner_size is &&mut so we have to dereference it twice
                self.resize(*new_inner_size);
            }
            _ => {}
        }
    }

    pub fn handle_event<T>(&mut self, event: Event<'_, T>, control_flow: &mut ControlFlow) {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, window_id } if window_id == self.window.id() => {
                self.handle_window_event(event, control_flow)
            }
            Event::RedrawRequested(window_id) if window_id == self.window.id() => {
                self.update();
                match self.render() {
                    Ok(_) => {}
                    // Reconfigure the surface if lost
                    Err(wgpu::SurfaceError::Lost) => self.resize(self.size),
                    // The system is out of memory, we should probably quit
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("out of GPU memory, exiting");
                        *control_flow = ControlFlow::Exit
                    }
                    // All other errors (Outdated, Timeout) should be resolved by the next frame
                    Err(e) => log::warn!("{:?}", e),
                }
            }
            Event::MainEventsCleared => {
                // RedrawRequested will only trigger once, unless we manually
                // request it.
                self.window().request_redraw();
            }
            _ => (),
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    fn toggle_fullscreen(&mut self) {
        let fullscreen = match self.window.fullscreen() {
            Some(_) => None,
            None => Some(Fullscreen::Borderless(None)),
        };
        self.window.set_fullscreen(fullscreen);
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.depth_view = create_depth_view(&self.device, &self.config);
            self.camera.aspect = new_size.width as f32 / new_size.height as f32;
        }
    }

    fn input(&mut self, event: &WindowEvent) -> bool {
        self.camera_controller.process_events(event)
    }

    fn update(&mut self) {
        self.camera_controller.update_camera(&mut self.camera);
        self.camera_uniform.update_view_proj(&self.camera);
        self.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.camera_uniform]),
        );
    }

    // Uploads the triangles of the current selection, or drops the buffer if nothing is
    // highlighted.
    fn rebuild_selection(&mut self) {
        self.selection = self
            .panel
            .selection()
            .filter(|selection| !selection.is_empty())
            .map(|selection| {
                DrawBuffer::new(
                    &self.device,
                    "Selection Vertex Buffer",
                    &scene::selection_vertices(&self.mesh, selection),
                )
            });
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Run the panel first, a button press may change what the scene draws this frame.
        let raw_input = self.egui_state.take_egui_input(&self.window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            if self.panel.visible {
                ui::draw_panel(ctx, &mut self.panel, &self.mesh);
            }
        });
        self.egui_state.handle_platform_output(
            &self.window,
            &self.egui_ctx,
            full_output.platform_output,
        );
        if self.panel.take_selection_changed() {
            self.rebuild_selection();
        }

        let paint_jobs = self.egui_ctx.tessellate(full_output.shapes);
        let screen_descriptor = egui_wgpu::renderer::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: self.egui_ctx.pixels_per_point(),
        };
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        let egui_commands = self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: true,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: true,
                    }),
                    stencil_ops: None,
                }),
            });
            render_pass.set_pipeline(&self.line_pipeline);
            render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.grid.buffer.slice(..));
            render_pass.draw(0..self.grid.count, 0..1);

            if self.panel.show_mesh && self.num_wireframe_indices > 0 {
                render_pass.set_vertex_buffer(0, self.mesh_vertex_buffer.slice(..));
                render_pass.set_index_buffer(
                    self.wireframe_index_buffer.slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                render_pass.draw_indexed(0..self.num_wireframe_indices, 0, 0..1);
            }

            if let Some(selection) = &self.selection {
                render_pass.set_pipeline(&self.fill_pipeline);
                render_pass.set_vertex_buffer(0, selection.buffer.slice(..));
                render_pass.draw(0..selection.count, 0..1);
            }
        }

        {
            // The panel is drawn over the scene without depth testing.
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Panel Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: true,
                    },
                })],
                depth_stencil_attachment: None,
            });
            self.egui_renderer
                .render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        // submit will accept anything that implements IntoIter
        self.queue
            .submit(egui_commands.into_iter().chain(std::iter::once(encoder.finish())));
        output.present();
        Ok(())
    }
}

/// Loads the model named by `config` and opens the viewer window.
///
/// Only returns if setup fails; once the event loop starts it owns the thread until the
/// window is closed.
pub fn run(config: ViewerConfig) -> anyhow::Result<()> {
    env_logger::init();

    let mesh: IndexedMesh = meshpick_obj::read_obj(&config.path).map_err(|e| {
        log::error!("{:#}", e);
        e
    })?;
    log::info!("Size of Mesh: {} kB", mesh.footprint().kilobytes());

    let event_loop = EventLoop::new(); // Loop provided by winit for handling window events
    let window = WindowBuilder::new()
        .with_title(format!("meshpick - {}", config.path.display()))
        .build(&event_loop)?;

    let mut state = pollster::block_on(State::new(window, &event_loop, mesh, &config))?;

    // Opens the window and starts processing events
    event_loop.run(move |event, _, control_flow| {
        state.handle_event(event, control_flow);
    });
}
