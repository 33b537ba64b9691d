//! Short-lived banners announcing session notices.
//!
//! One banner per notice kind: a newer notice of the same kind replaces the
//! older banner instead of stacking. Banners run on the same epoch clock as
//! the countdown, so fading is a pure function of `now`.

use egui::{Align2, Context, Margin, RichText, Stroke};

use crate::models::timer::{EpochSeconds, RgbaColor};
use crate::ui_egui::theme::{to_color32, MyPumpTheme};

const VISIBLE_SECONDS: f64 = 3.0;
const FADE_SECONDS: f64 = 0.5;
const MAX_BANNERS: usize = 3;
const BANNER_SPACING: f32 = 46.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    MealAdded,
    GoalImminent,
    TimerAdjusted,
    TimeUp,
}

impl ToastKind {
    fn marker(self) -> &'static str {
        match self {
            ToastKind::MealAdded => "✓",
            ToastKind::GoalImminent => "★",
            ToastKind::TimerAdjusted => "⏱",
            ToastKind::TimeUp => "⚠",
        }
    }

    fn accent(self) -> RgbaColor {
        match self {
            ToastKind::MealAdded | ToastKind::GoalImminent => RgbaColor::GREEN,
            ToastKind::TimerAdjusted => RgbaColor::YELLOW,
            ToastKind::TimeUp => RgbaColor::RED,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Banner {
    kind: ToastKind,
    text: String,
    shown_at: EpochSeconds,
}

impl Banner {
    /// 1.0 while fully visible, falling to 0.0 over the last half second.
    fn alpha(&self, now: EpochSeconds) -> f32 {
        let left = VISIBLE_SECONDS - (now - self.shown_at);
        (left / FADE_SECONDS).clamp(0.0, 1.0) as f32
    }
}

#[derive(Debug, Default)]
pub struct ToastQueue {
    banners: Vec<Banner>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>, now: EpochSeconds) {
        self.banners.retain(|banner| banner.kind != kind);
        self.banners.push(Banner {
            kind,
            text: text.into(),
            shown_at: now,
        });
        if self.banners.len() > MAX_BANNERS {
            self.banners.remove(0);
        }
    }

    /// Drop banners that have fully faded.
    pub fn prune(&mut self, now: EpochSeconds) {
        self.banners.retain(|banner| banner.alpha(now) > 0.0);
    }

    /// Draw the banners stacked below the top edge, newest first.
    pub fn show(&mut self, ctx: &Context, theme: &MyPumpTheme, now: EpochSeconds) {
        self.prune(now);
        if self.banners.is_empty() {
            return;
        }
        ctx.request_repaint();

        for (slot, banner) in self.banners.iter().rev().enumerate() {
            let alpha = banner.alpha(now);
            let accent = to_color32(banner.kind.accent()).gamma_multiply(alpha);
            let text = theme.text_primary.gamma_multiply(alpha);

            egui::Area::new(egui::Id::new(("toast", banner.kind)))
                .anchor(Align2::CENTER_TOP, [0.0, 16.0 + slot as f32 * BANNER_SPACING])
                .order(egui::Order::Foreground)
                .interactable(false)
                .show(ctx, |ui| {
                    egui::Frame::none()
                        .fill(theme.surface.gamma_multiply(alpha))
                        .stroke(Stroke::new(1.5, accent))
                        .rounding(10.0)
                        .inner_margin(Margin::symmetric(14.0, 8.0))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(banner.kind.marker()).color(accent).strong());
                                ui.label(RichText::new(&banner.text).color(text));
                            });
                        });
                });
        }
    }
}
