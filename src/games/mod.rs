//! Rule sets implementing `RulesEngine`.

pub mod oware;
