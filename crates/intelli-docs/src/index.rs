use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::MemberDescriptor;

/// Descriptors keyed by member path, in sorted key order.
///
/// Repeated signatures for the same path are kept as overloads.
#[derive(Debug, Default, Clone, Serialize)]
pub struct MemberIndex {
    members: BTreeMap<String, Vec<MemberDescriptor>>,
}

impl MemberIndex {
    pub fn insert(&mut self, key: impl Into<String>, descriptor: MemberDescriptor) {
        self.members.entry(key.into()).or_default().push(descriptor);
    }

    pub fn get(&self, key: &str) -> Option<&[MemberDescriptor]> {
        self.members.get(key).map(Vec::as_slice)
    }

    /// Number of distinct member paths.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[MemberDescriptor])> {
        self.members
            .iter()
            .map(|(key, descriptors)| (key.as_str(), descriptors.as_slice()))
    }
}

/// Members of one owning object, keyed by bare member name.
pub type ObjectMembers = IndexMap<String, Vec<MemberDescriptor>>;

/// Owning object -> bare member name -> overloads.
///
/// Only directly owned members (exactly one `.` in the qualified path) are
/// grouped; nested paths such as `qm.load.jsonFile(...)` are dropped.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct ObjectGroupIndex {
    objects: IndexMap<String, ObjectMembers>,
    #[serde(skip)]
    dropped: usize,
}

impl ObjectGroupIndex {
    /// Groups members in first-seen order while walking the sorted index.
    pub fn from_members(members: &MemberIndex) -> Self {
        let mut index = Self::default();
        for (_, descriptors) in members.iter() {
            for descriptor in descriptors {
                if descriptor.path_depth() != 1 {
                    index.dropped += 1;
                    continue;
                }
                index
                    .objects
                    .entry(descriptor.owning_object.clone())
                    .or_default()
                    .entry(descriptor.bare_member_name.clone())
                    .or_default()
                    .push(descriptor.clone());
            }
        }
        index
    }

    pub fn get(&self, object: &str) -> Option<&ObjectMembers> {
        self.objects.get(object)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Descriptors excluded because their path was nested.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ObjectMembers)> {
        self.objects
            .iter()
            .map(|(object, members)| (object.as_str(), members))
    }
}
