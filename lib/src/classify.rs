//! Classifying groups of living cells by their shapes.

use crate::{
    cells::Coord,
    error::Error,
    group::Group,
    pattern::{io_error, Pattern},
    world::World,
};
use std::{collections::HashSet, fs, io::ErrorKind, ops::Index, path::Path};

#[cfg(feature = "serde")]
use serde::ser::{Serialize, SerializeMap, Serializer};

/// The name reported for groups that match no template.
pub const UNKNOWN: &str = "unknown";

/// Templates of [`Classifier::standard`], in registration order.
pub const STANDARD_TEMPLATES: [(&str, &str); 7] = [
    ("block", include_str!("../templates/block.txt")),
    ("box", include_str!("../templates/box.txt")),
    ("glider", include_str!("../templates/glider.txt")),
    ("hive", include_str!("../templates/hive.txt")),
    ("long_ship", include_str!("../templates/long_ship.txt")),
    ("pond", include_str!("../templates/pond.txt")),
    ("snake", include_str!("../templates/snake.txt")),
];

/// A named reference shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    name: String,
    pattern: Pattern,
}

impl Template {
    /// Creates a template.
    pub fn new<S: ToString>(name: S, pattern: Pattern) -> Self {
        Template {
            name: name.to_string(),
            pattern,
        }
    }

    /// Loads a template file. The name is the file name without extension.
    ///
    /// Returns [`Error::MissingTemplate`] if the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::MissingTemplate(path.to_path_buf()),
            _ => io_error(path, e),
        })?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let pattern = Pattern::parse(&path.display().to_string(), &text)?;
        log::debug!(
            "Loaded template {:?} ({}x{}) from {:?}",
            name,
            pattern.width(),
            pattern.height(),
            path
        );
        Ok(Template::new(name, pattern))
    }

    /// The name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shape.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

/// Classifies groups of living cells against a list of templates.
///
/// A group matches a template iff its bounding box, translated to the
/// origin, equals the template cell by cell. Rotations and reflections
/// are not considered: a rotated glider is not a glider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classifier {
    /// Templates in registration order. The first match wins.
    templates: Vec<Template>,
}

impl Classifier {
    /// Creates a classifier from templates.
    ///
    /// Names must be unique and must not be [`UNKNOWN`].
    pub fn new(templates: Vec<Template>) -> Result<Self, Error> {
        let mut names = HashSet::new();
        for template in templates.iter() {
            if template.name == UNKNOWN {
                return Err(Error::ReservedName(template.name.clone()));
            }
            if !names.insert(template.name.as_str()) {
                return Err(Error::DuplicateTemplate(template.name.clone()));
            }
        }
        Ok(Classifier { templates })
    }

    /// Loads the given template files from a directory, in order.
    ///
    /// Fails on the first missing or malformed file.
    pub fn load<P: AsRef<Path>, S: AsRef<Path>>(dir: P, files: &[S]) -> Result<Self, Error> {
        let dir = dir.as_ref();
        let templates = files
            .iter()
            .map(|file| Template::load(dir.join(file)))
            .collect::<Result<Vec<_>, _>>()?;
        Classifier::new(templates)
    }

    /// The templates shipped with this crate: `block`, `box`, `glider`,
    /// `hive`, `long_ship`, `pond` and `snake`.
    pub fn standard() -> Result<Self, Error> {
        let templates = STANDARD_TEMPLATES
            .iter()
            .map(|&(name, text)| Ok(Template::new(name, Pattern::parse(name, text)?)))
            .collect::<Result<Vec<_>, Error>>()?;
        Classifier::new(templates)
    }

    /// The templates, in registration order.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Index of the first template matching the group.
    fn find(&self, group: &[Coord]) -> Option<usize> {
        let shape = Pattern::from_coords(group)?;
        self.templates.iter().position(|t| t.pattern == shape)
    }

    /// Name of the first template matching the group, or [`UNKNOWN`].
    pub fn classify(&self, group: &[Coord]) -> &str {
        self.find(group)
            .map_or(UNKNOWN, |i| self.templates[i].name.as_str())
    }

    /// Counts the groups matching each template.
    pub fn classify_groups(&self, groups: &[Group]) -> Classification {
        let mut counts: Vec<(String, usize)> = self
            .templates
            .iter()
            .map(|t| (t.name.clone(), 0))
            .collect();
        counts.push((String::from(UNKNOWN), 0));
        let unknown = self.templates.len();
        for group in groups {
            let i = self.find(group).unwrap_or(unknown);
            counts[i].1 += 1;
        }
        Classification { counts }
    }

    /// Splits the world into groups and counts the groups matching each template.
    pub fn classify_board(&self, world: &World) -> Classification {
        self.classify_groups(&world.groups())
    }
}

/// Number of groups of each shape in one generation.
///
/// Every template name, and [`UNKNOWN`], is present even when its count is `0`.
/// Iteration follows the registration order of the templates, with
/// [`UNKNOWN`] last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Classification {
    counts: Vec<(String, usize)>,
}

impl Classification {
    /// The count for a name, `None` if the name is not known.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, count)| count)
    }

    /// Number of groups that matched no template.
    pub fn unknown(&self) -> usize {
        self.get(UNKNOWN).unwrap_or(0)
    }

    /// Total number of groups.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&(_, count)| count).sum()
    }

    /// All names with their counts.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// Names with positive counts.
    pub fn non_zero(&self) -> impl Iterator<Item = (&str, usize)> {
        self.iter().filter(|&(_, count)| count > 0)
    }
}

impl Index<&str> for Classification {
    type Output = usize;

    /// # Panics
    ///
    /// Panics if the name is neither a template name nor [`UNKNOWN`].
    fn index(&self, name: &str) -> &usize {
        self.counts
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, count)| count)
            .unwrap_or_else(|| panic!("no template named {:?}", name))
    }
}

#[cfg(feature = "serde")]
impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (name, count) in self.counts.iter() {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}
