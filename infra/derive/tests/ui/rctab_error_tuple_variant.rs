use rctab_derive::rctab_error;

#[rctab_error]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(std::io::Error),
}

fn main() {}
