pub mod add;
pub mod del;
pub mod log;
pub mod session;

pub use add::{AddLogic, NewClass, Recurrence};
pub use del::DeleteLogic;
pub use session::{Session, SessionReport};
