#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Argument {argument} of `{function}` is outside of [-1, 1]")]
    Domain {
        function: &'static str,
        argument: f64,
    },

    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),

    #[error("Can't parse `{0}`")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
