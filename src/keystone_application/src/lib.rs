pub mod use_cases;

pub use use_cases::{
    login::{LoginValidator, LoginValidatorBuilder},
    signup::{SignupError, SignupUseCase},
};
