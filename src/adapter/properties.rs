use ph_client::operations::posts::PostField;

/// Maps the property names callers may ask for onto post fields.
///
/// Names are matched without regard to ASCII case, so `createdat` and
/// `CREATEDAT` both mean `createdAt`.
#[derive(Debug, Clone, Copy)]
pub struct PropertyMap {
    entries: [(&'static str, PostField); 7],
}

/// The properties every post exposes, in the order `*` expands to
pub const PROPERTY_MAP: PropertyMap = PropertyMap {
    entries: [
        ("id", PostField::Id),
        ("name", PostField::Name),
        ("createdAt", PostField::CreatedAt),
        ("featuredAt", PostField::FeaturedAt),
        ("url", PostField::Url),
        ("tagline", PostField::Tagline),
        ("description", PostField::Description),
    ],
};

impl PropertyMap {
    /// The canonical property names, in order
    pub fn canonical_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Finds the field for `name`. Unknown names have no field.
    pub fn lookup(&self, name: &str) -> Option<PostField> {
        self.entries
            .iter()
            .find(|(canonical, _)| canonical.eq_ignore_ascii_case(name))
            .map(|(_, field)| *field)
    }

    /// Pairs each requested name with the field it reads
    pub fn columns<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Vec<Column> {
        names
            .into_iter()
            .map(|name| Column {
                name: name.to_string(),
                field: self.lookup(name),
            })
            .collect()
    }
}

/// One column of the result table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// The header cell
    pub name: String,
    /// The field the column reads, if the name is known
    pub field: Option<PostField>,
}
