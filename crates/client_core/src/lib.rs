//! Curriculum tree and mission panel state, independent of any presentation
//! environment.

pub mod board;
pub mod config;
pub mod controller;
pub mod render;
pub mod widgets;

pub use board::MissionBoard;
pub use config::BoardSettings;
pub use controller::{ArrowDirection, SelectionState, UiAction};
pub use render::DescriptionBlock;
pub use widgets::{HeadlessTabs, HeadlessTree, TabWidget, TreeWidget};

use storage::ContentStore;
use web_bridge::EventBridge;

pub type HeadlessBoard = MissionBoard<HeadlessTree, HeadlessTabs>;

/// Board over the reference curriculum and markup (nine sections of five
/// steps, five tabs with arrows).
pub fn reference_board(bridge: EventBridge) -> HeadlessBoard {
    MissionBoard::new(
        ContentStore::reference(),
        HeadlessTree::with_layout(
            storage::reference::COURSE_COUNT as usize,
            storage::reference::STEP_COUNT as usize,
        ),
        HeadlessTabs::standard(),
        BoardSettings::default(),
    )
    .with_bridge(bridge)
}
