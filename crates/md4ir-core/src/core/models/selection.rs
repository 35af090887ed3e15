use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("expected 2, 3 or 4 sites (bond, angle or dihedral), got {0}")]
    UnsupportedArity(usize),

    #[error("atom indices are 1-based, 0 is not a valid atom")]
    ZeroIndex,

    #[error("atom {index} is out of range for a trajectory with {atom_count} atoms")]
    AtomOutOfRange { index: usize, atom_count: usize },

    #[error("{geometry} {selection} is undefined at frame {frame}: {reason}")]
    DegenerateGeometry {
        geometry: &'static str,
        selection: String,
        frame: usize,
        reason: &'static str,
    },
}

/// A point taking part in a measurement: a real atom or the midpoint of two atoms.
///
/// Indices are 0-based; `Display` renders them 1-based as users write them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Site {
    Atom(usize),
    Centroid(usize, usize),
}

impl Site {
    pub fn atom_from_one_based(index: usize) -> Result<Self, SelectionError> {
        index
            .checked_sub(1)
            .map(Site::Atom)
            .ok_or(SelectionError::ZeroIndex)
    }

    pub fn centroid_from_one_based(a: usize, b: usize) -> Result<Self, SelectionError> {
        match (a.checked_sub(1), b.checked_sub(1)) {
            (Some(a), Some(b)) => Ok(Site::Centroid(a, b)),
            _ => Err(SelectionError::ZeroIndex),
        }
    }

    pub fn atom_indices(&self) -> Vec<usize> {
        match *self {
            Site::Atom(i) => vec![i],
            Site::Centroid(a, b) => vec![a, b],
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Site::Atom(i) => write!(f, "{}", i + 1),
            Site::Centroid(a, b) => write!(f, "c({},{})", a + 1, b + 1),
        }
    }
}

/// Which geometric quantity a selection measures; fixed by its arity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtomSelection {
    Bond([Site; 2]),
    Angle([Site; 3]),
    Dihedral([Site; 4]),
}

impl AtomSelection {
    pub fn new(sites: Vec<Site>) -> Result<Self, SelectionError> {
        match sites.as_slice() {
            &[a, b] => Ok(Self::Bond([a, b])),
            &[a, b, c] => Ok(Self::Angle([a, b, c])),
            &[a, b, c, d] => Ok(Self::Dihedral([a, b, c, d])),
            _ => Err(SelectionError::UnsupportedArity(sites.len())),
        }
    }

    /// Builds a selection from 0-based atom indices.
    pub fn from_atoms(indices: &[usize]) -> Result<Self, SelectionError> {
        Self::new(indices.iter().copied().map(Site::Atom).collect())
    }

    /// Builds a selection from 1-based atom indices as given on the command line.
    pub fn from_one_based(indices: &[usize]) -> Result<Self, SelectionError> {
        let sites = indices
            .iter()
            .map(|&i| Site::atom_from_one_based(i))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(sites)
    }

    pub fn sites(&self) -> &[Site] {
        match self {
            Self::Bond(s) => s,
            Self::Angle(s) => s,
            Self::Dihedral(s) => s,
        }
    }

    pub fn geometry_name(&self) -> &'static str {
        match self {
            Self::Bond(_) => "bond",
            Self::Angle(_) => "angle",
            Self::Dihedral(_) => "dihedral",
        }
    }

    /// Checks every referenced atom against the trajectory's atom count.
    pub fn validate_against(&self, atom_count: usize) -> Result<(), SelectionError> {
        match self
            .sites()
            .iter()
            .flat_map(Site::atom_indices)
            .find(|&i| i >= atom_count)
        {
            Some(index) => Err(SelectionError::AtomOutOfRange {
                index: index + 1,
                atom_count,
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Display for AtomSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.sites().iter().map(Site::to_string).collect();
        write!(f, "{}", labels.join("-"))
    }
}
