//! Route handlers

pub mod db_health;
pub mod health;
