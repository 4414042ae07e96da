use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected 3 vertices, got {0}")]
    VertexCount(usize),
    #[error("vertex `{0}` is not of the form x,y")]
    MissingComma(String),
    #[error("vertex `{0}` has more than two coordinates")]
    TooManyCoordinates(String),
    #[error("coordinate `{0}` is not a whole number")]
    NotAnInteger(String),
    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<ParseError>,
    },
}

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("parity must be +1 or -1, got {0}")]
    InvalidParity(i32),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("nothing to render")]
    EmptyCanvas,
    #[error("canvas of {width}x{height} cells is too large")]
    CanvasTooLarge { width: u64, height: u64 },
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
