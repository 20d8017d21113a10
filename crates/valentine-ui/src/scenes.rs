use egui::emath::Rot2;
use egui::epaint::TextShape;
use egui::{pos2, vec2, Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2};
use valentine_core::copy::ProposalCopy;
use valentine_core::layout::{CelebrationLayout, ProposalLayout};
use valentine_core::motion::{self, entrance};
use valentine_core::{CardInput, ScreenPosition};
use valentine_platform::MotionEngine;

use crate::assets::MoonArt;
use crate::paint::{self, Placement};

const HEART_SIZE: f32 = 32.0;
const HEART_FILL: Color32 = Color32::from_rgba_premultiplied(76, 58, 11, 77);
const BUTTERFLY_SIZE: f32 = 48.0;
const BUTTON_AREA: Vec2 = Vec2::new(512.0, 192.0);
const GAP: f32 = 32.0;
/// Above this width the card uses its larger type scale.
const WIDE: f32 = 768.0;

/// Turns the decline button's per-frame hover flag into pointer-enter edges.
#[derive(Debug, Default)]
pub struct DeclineHover {
    hovered: bool,
}

impl DeclineHover {
    pub fn update(&mut self, hovered: bool) -> bool {
        let entered = hovered && !self.hovered;
        self.hovered = hovered;
        entered
    }
}

fn percent_of(rect: Rect, anchor: glam::Vec2) -> Pos2 {
    rect.min + vec2(rect.width() * anchor.x / 100.0, rect.height() * anchor.y / 100.0)
}

fn to_egui(v: glam::Vec2) -> Vec2 {
    vec2(v.x, v.y)
}

fn text(painter: &Painter, center: Pos2, text: &str, size: f32, color: Color32) {
    painter.text(center, Align2::CENTER_CENTER, text, FontId::proportional(size), color);
}

fn spun_text(painter: &Painter, center: Pos2, text: &str, size: f32, degrees: f32, color: Color32) {
    let galley = painter.layout_no_wrap(text.to_owned(), FontId::proportional(size), color);
    let angle = degrees.to_radians();
    let pos = center - Rot2::from_angle(angle) * (galley.size() / 2.0);
    painter.add(TextShape::new(pos, galley, color).with_angle(angle));
}

/// Daytime scene. Returns the input the user produced this frame, if any.
pub fn proposal(
    ui: &Ui,
    layout: &ProposalLayout<'_>,
    engine: &impl MotionEngine,
    elapsed: f32,
    hover: &mut DeclineHover,
) -> Option<CardInput> {
    let screen = ui.max_rect();
    let painter = ui.painter();
    paint::daylight(painter, screen);

    for heart in layout.hearts {
        let pose = engine.sample(&motion::heart_float(heart), elapsed);
        let center = percent_of(screen, heart.anchor) + Vec2::splat(HEART_SIZE / 2.0) + to_egui(pose.offset);
        paint::heart(painter, center, HEART_SIZE * 0.85, pose.rotate, HEART_FILL);
    }

    let copy = layout.copy;
    let fade = engine.sample(&entrance::proposal(), elapsed).opacity;
    let (heading_size, question_size, subtext_size) = if screen.width() >= WIDE {
        (72.0, 96.0, 20.0)
    } else {
        (48.0, 60.0, 18.0)
    };
    let column = 60.0 + GAP + heading_size + 16.0 + question_size + GAP + subtext_size + GAP
        + GAP + BUTTON_AREA.y + 16.0 + 14.0;
    let cx = screen.center().x;
    let mut y = screen.center().y - column / 2.0;

    let pulse = engine.sample(&motion::emoji_pulse(), elapsed);
    let emoji_color = paint::PINK_500.gamma_multiply(fade);
    spun_text(painter, pos2(cx, y + 30.0), copy.emoji, 60.0 * pulse.scale, pulse.rotate, emoji_color);
    y += 60.0 + GAP;

    let heading = engine.sample(&entrance::heading(), elapsed);
    let alpha = fade * heading.opacity;
    let shift = heading.offset.y;
    text(painter, pos2(cx, y + shift + heading_size / 2.0), copy.heading, heading_size, paint::AMBER_500.gamma_multiply(alpha));
    y += heading_size + 16.0;
    text(painter, pos2(cx, y + shift + question_size / 2.0), copy.question, question_size, paint::RED_500.gamma_multiply(alpha));
    y += question_size + GAP;

    let subtext = engine.sample(&entrance::subtext(), elapsed).opacity * fade;
    text(painter, pos2(cx, y + subtext_size / 2.0), copy.subtext, subtext_size, paint::AMBER_600.gamma_multiply(subtext));
    y += subtext_size + GAP + GAP;

    let buttons = engine.sample(&entrance::buttons(), elapsed);
    let area_size = vec2(BUTTON_AREA.x.min((screen.width() - 48.0).max(160.0)), BUTTON_AREA.y) * buttons.scale;
    let area = Rect::from_center_size(pos2(cx, y + BUTTON_AREA.y / 2.0), area_size);
    let alpha = fade * buttons.opacity;
    let accepted = accept_button(ui, engine, area, copy, elapsed, alpha, buttons.scale);
    let declined = decline_button(ui, area, copy, layout.decline_at, alpha, buttons.scale, hover);
    y += BUTTON_AREA.y + 16.0;

    let hint = engine.sample(&entrance::hint(), elapsed).opacity * fade;
    text(painter, pos2(cx, y + 7.0), copy.hint, 14.0, paint::AMBER_500.gamma_multiply(0.6 * hint));

    accepted.or(declined)
}

fn accept_button(
    ui: &Ui,
    engine: &impl MotionEngine,
    area: Rect,
    copy: &ProposalCopy,
    elapsed: f32,
    alpha: f32,
    scale: f32,
) -> Option<CardInput> {
    let painter = ui.painter();
    let galley = painter.layout_no_wrap(
        copy.accept_label.to_owned(),
        FontId::proportional(24.0 * scale),
        Color32::WHITE.gamma_multiply(alpha),
    );
    let base = galley.size() + vec2(112.0, 40.0) * scale;
    let hit = Rect::from_center_size(pos2(area.center().x, area.top() + base.y / 2.0), base);
    let response = ui.interact(hit, ui.id().with("accept"), Sense::click());

    let grow = if response.is_pointer_button_down_on() {
        0.95
    } else if response.hovered() {
        1.1
    } else {
        1.0
    };
    let rect = Rect::from_center_size(hit.center(), hit.size() * grow);
    let radius = rect.height() / 2.0;
    if response.hovered() {
        let shadow = rect.translate(vec2(0.0, 10.0)).expand(6.0);
        painter.rect_filled(shadow, radius, paint::PINK_500.gamma_multiply(0.25 * alpha));
    }
    painter.rect_filled(rect, radius, paint::ROSE_500.gamma_multiply(alpha));

    let shine = engine.sample(&motion::accept_shine(), elapsed);
    let glint = rect.translate(vec2(rect.width() * shine.sweep, 0.0));
    paint::horizontal_glint(&painter.with_clip_rect(rect), glint, Color32::WHITE.gamma_multiply(0.3 * alpha));
    painter.galley(rect.center() - galley.size() / 2.0, galley, Color32::WHITE);

    response.clicked().then_some(CardInput::AcceptClick)
}

fn decline_button(
    ui: &Ui,
    area: Rect,
    copy: &ProposalCopy,
    at: ScreenPosition,
    alpha: f32,
    scale: f32,
    hover: &mut DeclineHover,
) -> Option<CardInput> {
    let painter = ui.painter();
    // Glide to the new spot instead of teleporting.
    let left = ui.ctx().animate_value_with_time(ui.id().with("decline-left"), at.left, 0.3);
    let top = ui.ctx().animate_value_with_time(ui.id().with("decline-top"), at.top, 0.3);

    let galley = painter.layout_no_wrap(
        copy.decline_label.to_owned(),
        FontId::proportional(18.0 * scale),
        paint::GRAY_500.gamma_multiply(alpha),
    );
    let size = galley.size() + vec2(80.0, 32.0) * scale;
    let min = area.min + vec2(area.width() * left / 100.0, area.height() * top / 100.0);
    let rect = Rect::from_min_size(min, size);
    let response = ui.interact(rect, ui.id().with("decline"), Sense::click());

    let radius = rect.height() / 2.0;
    let border = if response.hovered() { paint::GRAY_500 } else { paint::GRAY_400 };
    painter.rect_filled(rect, radius, Color32::WHITE.gamma_multiply(0.8 * alpha));
    painter.rect_stroke(rect, radius, Stroke::new(3.0, border.gamma_multiply(alpha)), StrokeKind::Inside);
    painter.galley(rect.center() - galley.size() / 2.0, galley, paint::GRAY_500);

    let touched = response.is_pointer_button_down_on()
        && ui.input(|input| input.any_touches() && input.pointer.any_pressed());
    let entered = hover.update(response.hovered());
    if touched {
        Some(CardInput::DeclineTouchStart)
    } else if response.clicked() {
        Some(CardInput::DeclineClick)
    } else if entered {
        Some(CardInput::DeclinePointerEnter)
    } else {
        None
    }
}

/// Night scene shown after acceptance.
pub fn celebration(ui: &Ui, layout: &CelebrationLayout<'_>, engine: &impl MotionEngine, elapsed: f32, moon: &MoonArt) {
    let screen = ui.max_rect();
    let painter = ui.painter();
    paint::daylight(painter, screen);
    let night = engine.sample(&entrance::night_sky(), elapsed).opacity;
    paint::vertical_gradient(painter, screen, &[Color32::BLACK, paint::BLUE_900, paint::BLUE_700], night);

    for star in layout.stars {
        let pose = engine.sample(&motion::star_twinkle(star), elapsed);
        let center = percent_of(screen, star.anchor) + Vec2::splat(star.size / 2.0);
        painter.circle_filled(center, star.size / 2.0, Color32::WHITE.gamma_multiply(pose.opacity));
    }

    let spec = &layout.moon;
    let grow = engine.sample(&entrance::moon(), elapsed).scale;
    let right = screen.right() - screen.width() * spec.right_fraction;
    let frame = Rect::from_min_size(pos2(right - spec.diameter, screen.top() + spec.top), Vec2::splat(spec.diameter));
    if grow > 0.0 {
        let radius = spec.diameter / 2.0 * grow;
        paint::glow(painter, frame.center(), radius, 1.0);
        match moon {
            MoonArt::Loaded(texture) => {
                paint::textured_disc(painter, frame.center(), radius, texture.id(), Color32::WHITE)
            }
            MoonArt::Pending | MoonArt::Broken => {
                let shrunk = Rect::from_center_size(frame.center(), frame.size() * grow);
                paint::broken_image(painter, shrunk, spec.alt, 1.0);
            }
        }
    }

    let poem = engine.sample(&entrance::poem(), elapsed);
    let size = if screen.width() >= WIDE { 20.0 } else { 18.0 };
    let line_height = size * 1.625;
    // Four blank lines sit above the first stanza.
    let lines = layout.poem.len() + 4;
    let mut y = screen.center().y - line_height * lines as f32 / 2.0 + line_height * 4.0 + poem.offset.y;
    let ink = Color32::WHITE.gamma_multiply(poem.opacity);
    for line in layout.poem {
        if !line.is_empty() {
            text(painter, pos2(screen.center().x, y + line_height / 2.0), line, size, ink);
        }
        y += line_height;
    }

    let flutter = engine.sample(&motion::wing_flutter(), elapsed);
    for butterfly in layout.butterflies {
        let flight = engine.sample(&motion::butterfly_flight(butterfly), elapsed);
        let origin = percent_of(screen, butterfly.anchor) + Vec2::splat(BUTTERFLY_SIZE / 2.0) + to_egui(flight.offset);
        let unit = BUTTERFLY_SIZE / 100.0 * butterfly.scale * flutter.scale;
        let placement = Placement::new(origin, vec2(unit * flutter.scale_x, unit), flight.rotate);
        paint::butterfly(painter, &placement, flight.opacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_reports_only_the_entering_frame() {
        let mut hover = DeclineHover::default();
        assert!(!hover.update(false));
        assert!(hover.update(true));
        assert!(!hover.update(true));
        assert!(!hover.update(false));
        assert!(hover.update(true));
    }

    #[test]
    fn anchors_map_to_screen_percent() {
        let screen = Rect::from_min_size(pos2(100.0, 50.0), vec2(1000.0, 500.0));
        let at = percent_of(screen, glam::Vec2::new(20.0, 80.0));
        assert_eq!(at, pos2(300.0, 450.0));
    }
}
