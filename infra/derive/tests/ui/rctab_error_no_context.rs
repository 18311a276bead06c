use rctab_derive::rctab_error;

#[rctab_error]
pub enum LoadError {
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },
}

fn main() {}
