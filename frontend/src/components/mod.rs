pub mod audio_controls;
pub mod confetti;
pub mod prize_manager;
pub mod spin_button;
pub mod spin_wheel;
pub mod winner_modal;

pub use audio_controls::AudioControls;
pub use confetti::Confetti;
pub use prize_manager::PrizeManager;
pub use spin_button::SpinButton;
pub use spin_wheel::SpinWheel;
pub use winner_modal::WinnerModal;
