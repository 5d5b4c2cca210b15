// std imports
use std::{
    fs::{self, File},
    io::{self, BufRead, BufReader, stdin},
    path::PathBuf,
};

// ---

pub type InputStream = Box<dyn BufRead>;

/// A reference to an input file or stdin.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum InputReference {
    Stdin,
    File(PathBuf),
}

impl InputReference {
    /// Interprets a command line argument, `-` stands for stdin.
    pub fn from_arg(arg: impl Into<PathBuf>) -> Self {
        let path = arg.into();
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path)
        }
    }

    /// Opens the input for reading.
    pub fn open(&self) -> io::Result<Input> {
        log::debug!("opening {}", self.description());

        let stream: InputStream = match self {
            Self::Stdin => Box::new(stdin().lock()),
            Self::File(path) => {
                let meta = fs::metadata(path).map_err(|e| {
                    io::Error::new(
                        e.kind(),
                        format!("failed to get information on {}: {}", self.description(), e),
                    )
                })?;
                if meta.is_dir() {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("{} is a directory", self.description()),
                    ));
                }
                let file = File::open(path)
                    .map_err(|e| io::Error::new(e.kind(), format!("failed to open {}: {}", self.description(), e)))?;
                Box::new(BufReader::new(file))
            }
        };

        Ok(Input::new(self.clone(), stream))
    }

    /// Returns a description of the input reference.
    pub fn description(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".into(),
            Self::File(path) => format!("file {:?}", path.display().to_string()),
        }
    }
}

// ---

/// An opened input.
pub struct Input {
    pub reference: InputReference,
    pub stream: InputStream,
}

impl Input {
    pub fn new(reference: InputReference, stream: InputStream) -> Self {
        Self { reference, stream }
    }
}
