pub mod ats;
pub mod tailor;
