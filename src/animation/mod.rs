//! Time-domain building blocks: easing curves, tweens, reversible
//! transitions, and scroll scrubbing.

pub(crate) mod anim;
pub(crate) mod ease;
pub(crate) mod scrub;
