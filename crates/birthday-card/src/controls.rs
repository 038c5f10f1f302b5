//! Control system
//!
//! Every screen presents a set of controls (buttons) that depends on its
//! current state. A control that is not presented cannot be triggered: the
//! keyboard middleware drops any input whose control is missing, and the
//! views only draw the buttons contained in the set.

use bitflags::bitflags;

bitflags! {
    /// Controls that the active screen presents
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Controls: u8 {
        /// "Start the surprise" (intro)
        const START = 1 << 0;

        /// "Light the candle" / "Pop the balloons" (cake)
        const LIGHT = 1 << 1;

        /// Pop a balloon (balloons, while any is left)
        const POP = 1 << 2;

        /// "Decorate" (balloons, once all are popped)
        const DECORATE = 1 << 3;

        /// "Add sprinkles" (decorate)
        const SPRINKLE = 1 << 4;

        /// "Continue" (decorate)
        const CONTINUE = 1 << 5;

        /// "Replay" (finale)
        const REPLAY = 1 << 6;
    }
}
