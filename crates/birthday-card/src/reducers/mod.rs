pub mod app_reducer;
pub mod sequencer_reducer;
