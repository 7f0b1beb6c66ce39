pub mod layout;
pub mod task;
pub mod timeline;

pub use layout::{BoardLayout, ColumnHeader, PositionedTask, TaskGrid};
pub use task::Task;
pub use timeline::{TimeUnit, Viewport};
