use egui::emath::easing;
use valentine_core::motion::{Ease, Pose, Repeat, Timeline};
use valentine_platform::MotionEngine;

/// Keyframe sampler. Easing is applied per segment between keyframes.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyframeEngine;

impl MotionEngine for KeyframeEngine {
    fn sample(&self, timeline: &Timeline, elapsed: f32) -> Pose {
        let progress = progress(timeline, elapsed);
        let mut pose = Pose::default();
        for track in &timeline.tracks {
            if let Some(value) =
                value_at(&track.keyframes, timeline.times.as_deref(), progress, timeline.ease)
            {
                pose.set(track.property, value);
            }
        }
        pose
    }
}

/// Position within one run, in `[0, 1]`.
fn progress(timeline: &Timeline, elapsed: f32) -> f32 {
    let local = elapsed - timeline.delay;
    if local <= 0.0 {
        return 0.0;
    }
    if timeline.duration <= 0.0 {
        return 1.0;
    }
    match timeline.repeat {
        Repeat::Once => (local / timeline.duration).min(1.0),
        Repeat::Forever { gap } => {
            let period = timeline.duration + gap.max(0.0);
            ((local % period) / timeline.duration).min(1.0)
        }
    }
}

fn value_at(keyframes: &[f32], times: Option<&[f32]>, progress: f32, ease: Ease) -> Option<f32> {
    let (&first, rest) = keyframes.split_first()?;
    if rest.is_empty() {
        return Some(first);
    }
    let last = keyframes.len() - 1;
    let offset = |index: usize| match times {
        Some(times) if times.len() == keyframes.len() => times[index],
        _ => index as f32 / last as f32,
    };

    let segment = (0..last)
        .find(|&index| progress <= offset(index + 1))
        .unwrap_or(last - 1);
    let start = offset(segment);
    let end = offset(segment + 1);
    let local = if end > start {
        ((progress - start) / (end - start)).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let from = keyframes[segment];
    let to = keyframes[segment + 1];
    Some(from + (to - from) * eased(ease, local))
}

fn eased(ease: Ease, t: f32) -> f32 {
    match ease {
        Ease::Linear => easing::linear(t),
        Ease::EaseOut => easing::cubic_out(t),
        Ease::EaseInOut => easing::cubic_in_out(t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use valentine_core::motion::{entrance, Property};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn holds_first_keyframe_during_delay() {
        let timeline = Timeline::looping(2.0)
            .delay(1.0)
            .track(Property::Opacity, &[0.0, 0.8, 0.0]);
        let pose = KeyframeEngine.sample(&timeline, 0.5);
        assert_eq!(pose.opacity, 0.0);
    }

    #[test]
    fn linear_midpoint_hits_middle_keyframe() {
        let timeline = Timeline::looping(2.0)
            .ease(Ease::Linear)
            .track(Property::OffsetY, &[-20.0, -60.0, -20.0]);
        assert!(approx(KeyframeEngine.sample(&timeline, 1.0).offset.y, -60.0));
        assert!(approx(KeyframeEngine.sample(&timeline, 0.5).offset.y, -40.0));
    }

    #[test]
    fn loop_wraps_around() {
        let timeline = Timeline::looping(2.0)
            .ease(Ease::Linear)
            .track(Property::OffsetX, &[0.0, 10.0]);
        let first = KeyframeEngine.sample(&timeline, 0.5).offset.x;
        let later = KeyframeEngine.sample(&timeline, 4.5).offset.x;
        assert!(approx(first, later));
    }

    #[test]
    fn gap_holds_last_keyframe() {
        let timeline = Timeline::looping(2.0)
            .gap(1.0)
            .ease(Ease::Linear)
            .track(Property::Sweep, &[-1.0, 2.0]);
        assert!(approx(KeyframeEngine.sample(&timeline, 2.5).sweep, 2.0));
        assert!(approx(KeyframeEngine.sample(&timeline, 3.0).sweep, -1.0));
    }

    #[test]
    fn once_settles_on_last_keyframe() {
        let pose = KeyframeEngine.sample(&entrance::moon(), 10.0);
        assert_eq!(pose.scale, 1.0);
        let pose = KeyframeEngine.sample(&entrance::poem(), 0.0);
        assert_eq!(pose.opacity, 0.0);
        assert_eq!(pose.offset.y, 20.0);
    }

    #[test]
    fn explicit_times_shape_segments() {
        let timeline = Timeline::looping(10.0)
            .ease(Ease::Linear)
            .times(&[0.0, 0.2, 0.6, 1.0])
            .track(Property::OffsetY, &[50.0, -100.0, -250.0, -400.0])
            .track(Property::Rotate, &[0.0, 15.0, -10.0, 20.0, -15.0, 0.0]);
        let pose = KeyframeEngine.sample(&timeline, 2.0);
        assert!(approx(pose.offset.y, -100.0));
        // rotate has six keyframes so it ignores `times` and splits evenly.
        assert!(approx(pose.rotate, 15.0));
    }

    #[test]
    fn untouched_properties_stay_identity() {
        let timeline = Timeline::once(1.0).track(Property::Opacity, &[0.0, 1.0]);
        let pose = KeyframeEngine.sample(&timeline, 0.5);
        assert_eq!(pose.scale, 1.0);
        assert_eq!(pose.rotate, 0.0);
        assert_eq!(pose.offset, glam::Vec2::ZERO);
    }
}
