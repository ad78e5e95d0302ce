pub mod conflict;
