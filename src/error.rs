use std::io;

use thiserror::Error;

use crate::state::library::StoreFile;

/// Every failure the application reports to the user.
///
/// None of these are fatal. The `Display` text is what lands in the
/// notice bar at the bottom of the window.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error loading {} from file.", .file.label())]
    FileLoad {
        file: StoreFile,
        #[source]
        source: io::Error,
    },

    #[error("Error saving to file: {}", .file.file_name())]
    FileWrite {
        file: StoreFile,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Rejected user input. State is left untouched when one of these is raised.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a name.")]
    EmptyUsername,

    #[error("Please enter feedback before submitting.")]
    EmptyFeedback,

    #[error("Invalid time input.")]
    InvalidTimerInput,

    #[error("Please select a recipe first.")]
    NoRecipeSelected,

    #[error("Please select a recipe to remove.")]
    NoFavoriteSelected,
}
