//! Overlay message pools

/// Shown when a coin streak reaches the celebration threshold
pub const CELEBRATION_MESSAGES: [&str; 10] = [
    "MAMA MIA!",
    "SUPER!",
    "WAHOO!",
    "ON FIRE!",
    "UNSTOPPABLE!",
    "PERFECT!",
    "FLYING HIGH!",
    "LIGHTNING FAST!",
    "AMAZING!",
    "SPECTACULAR!",
];

/// Shown when the player loses a life
pub const DEATH_MESSAGES: [&str; 8] = [
    "OUCH!",
    "GAME OVER!",
    "OH NO!",
    "TRY AGAIN!",
    "SO CLOSE!",
    "BOOM!",
    "WHOOPS!",
    "BETTER LUCK!",
];

pub const POWER_UP_MESSAGE: &str = "POWER UP!";
