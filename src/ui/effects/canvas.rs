// SPDX-License-Identifier: MPL-2.0
//! Canvas drawing for the one-shot effects.
//!
//! Both effects are drawn procedurally from a normalized progress value, so
//! a frame is a pure function of `(kind, progress)` and re-rendering a
//! paused or finished frame is cheap.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

const STROKE_WIDTH: f32 = 3.0;
const ARC_SEGMENTS: usize = 30;

/// Builds the "sending" frame: a sweeping arc with a leading dot and an
/// expanding, fading pulse ring.
pub fn sending<'a, Message: 'a>(progress: f32, color: Color) -> Element<'a, Message> {
    let size = sizing::EFFECT_SURFACE;
    Canvas::new(SendingEffect {
        cache: Cache::default(),
        progress,
        color,
    })
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .into()
}

/// Builds the "success" frame: a ring that draws on, then a checkmark.
pub fn success<'a, Message: 'a>(progress: f32, color: Color) -> Element<'a, Message> {
    let size = sizing::EFFECT_SURFACE;
    Canvas::new(SuccessEffect {
        cache: Cache::default(),
        progress,
        color,
    })
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .into()
}

/// Appends an arc to a path builder as small line segments.
fn push_arc(
    builder: &mut canvas::path::Builder,
    center: Point,
    radius: f32,
    start_angle: f32,
    sweep: f32,
) {
    let start = Point::new(
        center.x + radius * start_angle.cos(),
        center.y + radius * start_angle.sin(),
    );
    builder.move_to(start);

    #[allow(clippy::cast_precision_loss)]
    // ARC_SEGMENTS=30, i∈[1,30] - well within f32 precision
    for i in 1..=ARC_SEGMENTS {
        let t = i as f32 / ARC_SEGMENTS as f32;
        let angle = start_angle + sweep * t;
        builder.line_to(Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        ));
    }
}

struct SendingEffect {
    cache: Cache,
    progress: f32,
    color: Color,
}

impl<Message> canvas::Program<Message> for SendingEffect {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - 8.0;

                // Track circle (subtle)
                let track = Path::circle(center, radius);
                frame.stroke(
                    &track,
                    Stroke::default().with_width(STROKE_WIDTH).with_color(Color {
                        a: 0.25,
                        ..self.color
                    }),
                );

                // Sweeping arc, one full revolution over the playback
                let start_angle = -PI / 2.0;
                let sweep = self.progress * 2.0 * PI;
                if sweep > 0.0 {
                    let mut arc_path = canvas::path::Builder::new();
                    push_arc(&mut arc_path, center, radius, start_angle, sweep);
                    frame.stroke(
                        &arc_path.build(),
                        Stroke::default()
                            .with_width(STROKE_WIDTH)
                            .with_color(self.color)
                            .with_line_cap(canvas::LineCap::Round),
                    );
                }

                // Leading dot at the arc head
                let head_angle = start_angle + sweep;
                let head = Point::new(
                    center.x + radius * head_angle.cos(),
                    center.y + radius * head_angle.sin(),
                );
                frame.fill(&Path::circle(head, STROKE_WIDTH * 1.6), self.color);

                // Expanding pulse ring that fades out as it grows
                let pulse_radius = radius * (0.3 + 0.7 * self.progress);
                let pulse_alpha = (1.0 - self.progress) * 0.4;
                if pulse_alpha > 0.0 {
                    let pulse = Path::circle(center, pulse_radius);
                    frame.stroke(
                        &pulse,
                        Stroke::default().with_width(1.5).with_color(Color {
                            a: pulse_alpha,
                            ..self.color
                        }),
                    );
                }
            });

        vec![geometry]
    }
}

struct SuccessEffect {
    cache: Cache,
    progress: f32,
    color: Color,
}

/// Fraction of the playback spent drawing the ring; the rest draws the
/// checkmark.
const RING_PHASE: f32 = 0.6;

impl<Message> canvas::Program<Message> for SuccessEffect {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - 8.0;

                // Ring draws on during the first phase
                let ring_t = (self.progress / RING_PHASE).min(1.0);
                let start_angle = -PI / 2.0;
                if ring_t > 0.0 {
                    let mut ring_path = canvas::path::Builder::new();
                    push_arc(&mut ring_path, center, radius, start_angle, ring_t * 2.0 * PI);
                    frame.stroke(
                        &ring_path.build(),
                        Stroke::default()
                            .with_width(STROKE_WIDTH)
                            .with_color(self.color)
                            .with_line_cap(canvas::LineCap::Round),
                    );
                }

                // Checkmark draws on during the second phase
                let check_t = ((self.progress - RING_PHASE) / (1.0 - RING_PHASE)).clamp(0.0, 1.0);
                if check_t > 0.0 {
                    let w = frame.width();
                    let h = frame.height();
                    let a = Point::new(w * 0.32, h * 0.52);
                    let b = Point::new(w * 0.45, h * 0.65);
                    let c = Point::new(w * 0.68, h * 0.38);

                    // First segment takes the first 40% of the check phase
                    let mut check_path = canvas::path::Builder::new();
                    check_path.move_to(a);
                    if check_t < 0.4 {
                        let t = check_t / 0.4;
                        check_path.line_to(lerp(a, b, t));
                    } else {
                        check_path.line_to(b);
                        let t = (check_t - 0.4) / 0.6;
                        check_path.line_to(lerp(b, c, t));
                    }
                    frame.stroke(
                        &check_path.build(),
                        Stroke::default()
                            .with_width(STROKE_WIDTH * 1.2)
                            .with_color(self.color)
                            .with_line_cap(canvas::LineCap::Round),
                    );
                }
            });

        vec![geometry]
    }
}

fn lerp(from: Point, to: Point, t: f32) -> Point {
    Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t)
}
