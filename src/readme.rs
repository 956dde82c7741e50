//! Human-readable descriptions of generated models.

use std::fmt::Write;

use crate::{IndexComponentType, Mode, ModelGroup};

/// Conversion to the text shown for a value in a model group's readme.
pub trait ReadmeString {
    fn to_readme_string(&self) -> String;
}

impl ReadmeString for IndexComponentType {
    fn to_readme_string(&self) -> String {
        match self {
            Self::UnsignedByte => "Unsigned Byte",
            Self::UnsignedShort => "Unsigned Short",
            Self::UnsignedInt => "Unsigned Int",
        }
        .to_owned()
    }
}

impl ReadmeString for Mode {
    fn to_readme_string(&self) -> String {
        match self {
            Self::Points => "Points",
            Self::Lines => "Lines",
            Self::LineLoop => "Line Loop",
            Self::LineStrip => "Line Strip",
            Self::Triangles => "Triangles",
            Self::TriangleStrip => "Triangle Strip",
            Self::TriangleFan => "Triangle Fan",
        }
        .to_owned()
    }
}

impl ReadmeString for [u32] {
    fn to_readme_string(&self) -> String {
        let mut res = String::from("[");
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                res.push_str(", ");
            }
            let _ = write!(res, "{v}");
        }
        res.push(']');
        res
    }
}

/// Render a Markdown table with one row per model and one column per used property.
///
/// Model names link to `<name>.glb`.
pub fn table(group: &impl ModelGroup) -> String {
    let used = group.used_properties();
    let mut res = String::from("| Model |");
    for name in used {
        let _ = write!(res, " {name} |");
    }
    res.push_str("\n| :---: |");
    for _ in used {
        res.push_str(" :---: |");
    }
    res.push('\n');

    for model in group.models() {
        let _ = write!(res, "| [{0}]({0}.glb) |", model.name);
        for name in used {
            match model.property(*name) {
                Some(prop) => {
                    let _ = write!(res, " {} |", prop.value);
                }
                None => res.push_str(" |"),
            }
        }
        res.push('\n');
    }
    res
}

/// Render a full readme document for a model group: a heading, its common properties if it has
/// any, and the [table] of models.
pub fn document(group: &impl ModelGroup) -> String {
    let mut res = format!("# {}\n\n", group.id());
    let common = group.common_properties();
    if !common.is_empty() {
        res.push_str("The following properties are common to every model in this group:\n\n");
        for prop in common {
            let _ = writeln!(res, "* **{}**: {}", prop.name, prop.value);
        }
        res.push('\n');
    }
    res.push_str(&table(group));
    res
}
