mod tip_screen;

pub use tip_screen::{KeyHandling, KeyPress, ScreenState, TipFormModel, TipScreen};
