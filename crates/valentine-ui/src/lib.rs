use crossbeam_channel::{Receiver, Sender};
use tracing::{info, warn};
use valentine_core::{compose, CardConfig, CardInput, SceneController, SceneLayout, ScreenPosition, Transition};
use valentine_platform::{AssetSource, MotionEngine, Result};

mod assets;
mod motion;
mod paint;
mod scenes;

pub use assets::{FsAssets, MoonArt};
pub use motion::KeyframeEngine;

use scenes::DeclineHover;

/// What the card reports to its host.
#[derive(Debug, Clone, PartialEq)]
pub enum CardEvent {
    Mounted { seed: u64 },
    DeclineDodged { input: CardInput, position: ScreenPosition },
    Accepted,
    Unmounted,
}

pub struct CardHandles {
    pub event_sender: Sender<CardEvent>,
    pub event_receiver: Receiver<CardEvent>,
}

/// Sends `event` to the host, warning instead of failing once the host has stopped listening.
fn notify(sender: &Sender<CardEvent>, event: CardEvent) -> bool {
    let delivered = sender.send(event).is_ok();
    if !delivered {
        warn!("card event channel closed; host no longer listening");
    }
    delivered
}

pub fn card_channel() -> CardHandles {
    let (event_sender, event_receiver) = crossbeam_channel::unbounded::<CardEvent>();
    CardHandles {
        event_sender,
        event_receiver,
    }
}

/// Opens the card window and blocks until it is closed.
pub fn run_card(config: &CardConfig, seed: u64, event_sender: Sender<CardEvent>) -> Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window.title.clone())
            .with_inner_size([config.window.width, config.window.height]),
        ..Default::default()
    };
    let decorations = config.decorations.clone();
    let assets = FsAssets::new(config.assets.dir.clone());
    let moon_path = config.assets.moon.clone();
    info!("opening card window; assets from {}", assets.root().display());

    eframe::run_native(
        &config.window.title,
        native_options,
        Box::new(move |_creation_context| {
            let controller = SceneController::new(&decorations, seed);
            notify(&event_sender, CardEvent::Mounted { seed });
            Ok(Box::new(ValentineApp::new(
                controller,
                KeyframeEngine,
                assets,
                moon_path,
                event_sender,
            )))
        }),
    )
    .map_err(|err| format!("eframe failed: {err}"))?;
    Ok(())
}

pub struct ValentineApp<M: MotionEngine, A: AssetSource> {
    controller: SceneController,
    motion: M,
    assets: A,
    moon_path: String,
    moon: MoonArt,
    mounted_at: Option<f64>,
    accepted_at: Option<f64>,
    decline_hover: DeclineHover,
    event_sender: Sender<CardEvent>,
}

impl<M: MotionEngine, A: AssetSource> ValentineApp<M, A> {
    pub fn new(
        controller: SceneController,
        motion: M,
        assets: A,
        moon_path: String,
        event_sender: Sender<CardEvent>,
    ) -> Self {
        Self {
            controller,
            motion,
            assets,
            moon_path,
            moon: MoonArt::Pending,
            mounted_at: None,
            accepted_at: None,
            decline_hover: DeclineHover::default(),
            event_sender,
        }
    }

    fn apply(&mut self, input: CardInput, now: f64) {
        let event = match self.controller.handle(input) {
            Transition::Relocated(position) => CardEvent::DeclineDodged { input, position },
            Transition::Accepted => {
                self.accepted_at = Some(now);
                CardEvent::Accepted
            }
            Transition::Unchanged => return,
        };
        notify(&self.event_sender, event);
    }
}

impl<M: MotionEngine, A: AssetSource> eframe::App for ValentineApp<M, A> {
    fn update(&mut self, context: &egui::Context, _frame: &mut eframe::Frame) {
        let now = context.input(|i| i.time);
        let mounted_at = *self.mounted_at.get_or_insert(now);

        let input = egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(context, |ui| match compose(&self.controller, &self.moon_path) {
                SceneLayout::Proposal(layout) => {
                    let elapsed = (now - mounted_at) as f32;
                    scenes::proposal(ui, &layout, &self.motion, elapsed, &mut self.decline_hover)
                }
                SceneLayout::Celebration(layout) => {
                    self.moon.ensure_loaded(context, &self.assets, layout.moon.logical_path);
                    let elapsed = (now - self.accepted_at.unwrap_or(now)) as f32;
                    scenes::celebration(ui, &layout, &self.motion, elapsed, &self.moon);
                    None
                }
            })
            .inner;

        if let Some(input) = input {
            self.apply(input, now);
        }
        // Decorations loop forever.
        context.request_repaint();
    }
}

impl<M: MotionEngine, A: AssetSource> Drop for ValentineApp<M, A> {
    fn drop(&mut self) {
        info!(state = ?self.controller.state(), "card closed");
        notify(&self.event_sender, CardEvent::Unmounted);
    }
}
