pub mod fine;
pub mod loan;

pub use fine::Fine;
pub use loan::Loan;
