// Hero animation clips, laid out after the hero sprite sheet (32x32 frames)

use super::direction::Direction;
use crate::engine::animation::AnimationClip;

/// Key of the spin attack clip
pub const CIRCULAR_ATTACK: &str = "circular-attack";

const WALK_FPS: f32 = 8.0;
const SWING_FPS: f32 = 8.0;
const CIRCULAR_FPS: f32 = 24.0;

/// Sprite-sheet frames of the spin attack, borrowed from the swing rows
const CIRCULAR_FRAMES: [u32; 17] = [
    16, 16, 16, 17, 18, 24, 25, 26, 21, 22, 30, 29, 28, 18, 19, 19, 19,
];

pub fn walk_key(direction: Direction) -> String {
    format!("walk-{}", direction)
}

pub fn swing_key(direction: Direction) -> String {
    format!("swing-{}", direction)
}

/// First sprite-sheet frame of each walk cycle
fn walk_start(direction: Direction) -> u32 {
    match direction {
        Direction::Down => 0,
        Direction::Right => 4,
        Direction::Up => 8,
        Direction::Left => 12,
    }
}

/// First sprite-sheet frame of each swing
fn swing_start(direction: Direction) -> u32 {
    match direction {
        Direction::Down => 16,
        Direction::Up => 20,
        Direction::Right => 24,
        Direction::Left => 28,
    }
}

/// Every clip the hero states play
pub fn hero_clips() -> Vec<AnimationClip> {
    let mut clips = Vec::with_capacity(9);

    for direction in Direction::ALL {
        let start = walk_start(direction);
        clips.push(AnimationClip::looping(
            &walk_key(direction),
            AnimationClip::frame_range(start, start + 3),
            WALK_FPS,
        ));

        let start = swing_start(direction);
        clips.push(AnimationClip::one_shot(
            &swing_key(direction),
            AnimationClip::frame_range(start, start + 3),
            SWING_FPS,
        ));
    }

    clips.push(AnimationClip::one_shot(
        CIRCULAR_ATTACK,
        CIRCULAR_FRAMES.to_vec(),
        CIRCULAR_FPS,
    ));

    clips
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        assert_eq!(walk_key(Direction::Down), "walk-down");
        assert_eq!(swing_key(Direction::Left), "swing-left");
    }

    #[test]
    fn test_hero_clips() {
        let clips = hero_clips();
        assert_eq!(clips.len(), 9);

        let walk_up = clips.iter().find(|clip| clip.key == "walk-up").unwrap();
        assert_eq!(walk_up.frames, vec![8, 9, 10, 11]);
        assert!(walk_up.looping);

        let swing_right = clips.iter().find(|clip| clip.key == "swing-right").unwrap();
        assert_eq!(swing_right.frames, vec![24, 25, 26, 27]);
        assert!(!swing_right.looping);
    }

    #[test]
    fn test_circular_attack_clip() {
        let clips = hero_clips();
        let spin = clips.iter().find(|clip| clip.key == CIRCULAR_ATTACK).unwrap();
        assert_eq!(spin.frame_count(), 17);
        assert!(!spin.looping);
        assert!((spin.frame_duration - 1.0 / 24.0).abs() < 1e-6);
    }
}
