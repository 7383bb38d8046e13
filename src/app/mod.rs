use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui::{self, Align, Context, Layout};

use crate::engine::{ForceLayout, LayoutEngine};
use crate::error::GraphError;
use crate::graph::GraphModel;
use crate::render::FrameShapes;
use crate::source::{self, LoadCounter, LoadTicket};
use crate::view::{MIN_ZOOM_RATIO, Viewport, ViewportTransform, ZoomLadder};

mod controls;
mod graph;

#[derive(Clone, Copy, Debug)]
pub struct ViewOptions {
    pub pan_margin: f32,
    pub zoom_ticks: usize,
}

type LoadResult = (LoadTicket, Result<GraphModel, String>);

pub struct DepvizApp {
    graph_source: String,
    options: ViewOptions,
    loads: LoadCounter,
    state: AppState,
    reload_rx: Option<Receiver<LoadResult>>,
}

enum AppState {
    Loading { rx: Receiver<LoadResult> },
    Ready(Box<ViewModel>),
    Error(String),
}

struct ViewModel {
    model: GraphModel,
    engine: ForceLayout,
    viewport: Viewport,
    ladder: ZoomLadder,
    transform: ViewportTransform,
    shapes: FrameShapes,
    pan_margin: f32,
    virtual_width: f32,
    virtual_height: f32,
    engine_loaded: bool,
    force_render: bool,
    drag_node: Option<usize>,
}

impl DepvizApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        graph_source: String,
        options: ViewOptions,
    ) -> Self {
        let loads = LoadCounter::default();
        let state = AppState::Loading {
            rx: spawn_load(&loads, graph_source.clone()),
        };
        Self {
            graph_source,
            options,
            loads,
            state,
            reload_rx: None,
        }
    }
}

fn spawn_load(loads: &LoadCounter, graph_source: String) -> Receiver<LoadResult> {
    let (tx, rx) = mpsc::channel();
    let ticket = loads.issue();

    thread::spawn(move || {
        let result = source::load_graph(&graph_source).map_err(|error| format!("{error:#}"));
        let _ = tx.send((ticket, result));
    });

    rx
}

/// Commits a finished load unless its ticket was superseded while the
/// request was in flight; stale responses are dropped, never shown.
fn commit_load(result: LoadResult, options: &ViewOptions) -> Option<AppState> {
    let (ticket, result) = result;
    if !ticket.is_current() {
        log::debug!("{}", GraphError::StaleFetch);
        return None;
    }

    Some(match result {
        Ok(model) => AppState::Ready(Box::new(ViewModel::new(model, options))),
        Err(error) => AppState::Error(error),
    })
}

impl eframe::App for DepvizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        match &mut self.state {
            AppState::Loading { rx } => {
                if let Ok(result) = rx.try_recv() {
                    transition = commit_load(result, &self.options);
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading dependency graph...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
            }
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load dependency graph");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        transition = Some(AppState::Loading {
                            rx: spawn_load(&self.loads, self.graph_source.clone()),
                        });
                    }
                });
            }
            AppState::Ready(model) => {
                let mut reload_requested = false;
                let is_reloading = self.reload_rx.is_some();
                model.show(ctx, &self.graph_source, &mut reload_requested, is_reloading);

                if reload_requested && self.reload_rx.is_none() {
                    self.reload_rx = Some(spawn_load(&self.loads, self.graph_source.clone()));
                }

                if let Some(rx) = self.reload_rx.take() {
                    match rx.try_recv() {
                        Ok(result) => {
                            transition = commit_load(result, &self.options);
                        }
                        Err(TryRecvError::Empty) => {
                            self.reload_rx = Some(rx);
                        }
                        Err(TryRecvError::Disconnected) => {
                            transition = Some(AppState::Error(
                                "Background load worker disconnected".to_owned(),
                            ));
                        }
                    }
                }
            }
        }

        if let Some(next_state) = transition {
            self.reload_rx = None;
            self.state = next_state;
        }
    }
}

impl ViewModel {
    fn new(model: GraphModel, options: &ViewOptions) -> Self {
        // Fresh snapshot: viewport back at the origin, ladder fully zoomed
        // out, engine rebuilt on the first draw once the surface size is
        // known.
        let viewport = Viewport::reset();
        let ladder = ZoomLadder::linear(MIN_ZOOM_RATIO, 1.0, options.zoom_ticks);
        let (virtual_width, virtual_height) = (960.0, 500.0);
        let transform = ViewportTransform::for_viewport(viewport, virtual_width, virtual_height)
            .expect("unit zoom ratio is valid");

        Self {
            model,
            engine: ForceLayout::new(),
            viewport,
            ladder,
            transform,
            shapes: FrameShapes::default(),
            pan_margin: options.pan_margin,
            virtual_width,
            virtual_height,
            engine_loaded: false,
            force_render: true,
            drag_node: None,
        }
    }

    fn show(
        &mut self,
        ctx: &Context,
        graph_source: &str,
        reload_requested: &mut bool,
        is_loading: bool,
    ) {
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("depviz");
                    ui.separator();
                    ui.label(format!("source: {graph_source}"));
                    ui.label(format!("nodes: {}", self.model.node_count()));
                    ui.label(format!("links: {}", self.model.link_count()));
                    let reload_button =
                        ui.add_enabled(!is_loading, egui::Button::new("Reload graph"));
                    if reload_button.clicked() {
                        *reload_requested = true;
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if is_loading {
                            ui.spinner();
                        }
                    });
                });
            });

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| self.draw_controls(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.draw_graph(ui));
    }

    fn refresh_transform(&mut self) {
        match ViewportTransform::for_viewport(
            self.viewport,
            self.virtual_width,
            self.virtual_height,
        ) {
            Ok(transform) => self.transform = transform,
            Err(error) => log::error!("keeping previous viewport transform: {error}"),
        }
    }

    fn zoom_in(&mut self) {
        if self.ladder.zoom_in() {
            self.apply_zoom_change();
        }
    }

    fn zoom_out(&mut self) {
        if self.ladder.zoom_out() {
            self.apply_zoom_change();
        }
    }

    fn apply_zoom_change(&mut self) {
        self.viewport.zoom_ratio = self.ladder.current();
        if self.ladder.is_zoomed_out() {
            // whole canvas visible again, origin pins at (0, 0)
            self.viewport.origin_x = 0.0;
            self.viewport.origin_y = 0.0;
        }
        self.refresh_transform();
        self.engine
            .resize(self.transform.visible_width, self.transform.visible_height);
        self.engine.resume();
        self.force_render = true;
    }
}
