use crate::error::AppError;

pub fn print_error(err: &AppError) {
    eprintln!("{}", err);
}
