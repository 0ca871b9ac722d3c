pub mod dashboard;
pub mod explanation;
pub mod flashcards;
pub mod focus;
pub mod leaderboard;
pub mod login;
pub mod profile;
pub mod quiz;
pub mod register;
