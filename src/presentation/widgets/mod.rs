mod footer_bar;
mod header_bar;
mod input;
mod task_list;
mod task_row;

pub use footer_bar::{FocusContext, FooterBar, FooterBarStyle};
pub use header_bar::{HeaderBar, HeaderBarStyle, task_counter};
pub use input::TextInput;
pub use task_list::{TaskListAction, TaskListState, TaskListView};
pub use task_row::{TaskRow, TaskRowAction, TaskRowState};
