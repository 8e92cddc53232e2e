//! The printed sections, one per stage.
//!
//! Sections 1 to 5 depend only on the module name. Sections 6 to 10 read the
//! resolved entity.

mod form;
mod menu;
mod routing;
mod scaffold;
mod service;
mod table;

pub use form::{FormLogic, FormMarkup};
pub use menu::MenuEntry;
pub use routing::{ModuleRouting, RoutingEntry};
pub use scaffold::{ModelScaffold, ModuleScaffold};
pub use service::DataService;
pub use table::{ColumnKeys, TableMarkup};
