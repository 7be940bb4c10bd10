use super::atom::AtomRecord;
use super::groups::Groups;
use serde::Serialize;
use std::collections::HashMap;

/// Atom records keyed by serial, plus the element index over them.
///
/// Records keep file order. The element index partitions the serials: every
/// serial sits in exactly one bucket, the one of its record's element.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AtomTable {
    atoms: Vec<AtomRecord>,
    #[serde(skip)]
    slots: HashMap<String, usize>,
    elements: Groups,
}

impl AtomTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            atoms: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
            elements: Groups::new(),
        }
    }

    /// Stores `record` under its serial.
    ///
    /// An existing record with the same serial is replaced in place and
    /// returned; its serial moves from the old element bucket to the end of
    /// the new one.
    pub fn insert(&mut self, record: AtomRecord) -> Option<AtomRecord> {
        let serial = record.serial.clone();
        let element = record.element().to_string();

        if let Some(&slot) = self.slots.get(&serial) {
            let previous = std::mem::replace(&mut self.atoms[slot], record);
            self.elements.remove_value(previous.element(), &serial);
            self.elements.push(&element, serial);
            return Some(previous);
        }

        self.slots.insert(serial.clone(), self.atoms.len());
        self.atoms.push(record);
        self.elements.push(&element, serial);
        None
    }

    pub fn get(&self, serial: &str) -> Option<&AtomRecord> {
        self.slots.get(serial).map(|&slot| &self.atoms[slot])
    }

    #[inline]
    pub fn contains(&self, serial: &str) -> bool {
        self.slots.contains_key(serial)
    }

    /// Records in file order.
    pub fn iter(&self) -> impl Iterator<Item = &AtomRecord> {
        self.atoms.iter()
    }

    /// Element symbol → serials, in first-seen element order.
    #[inline]
    pub fn element_index(&self) -> &Groups {
        &self.elements
    }

    /// Records of one element in element-index order, or `None` if the
    /// element has no atoms.
    pub fn atoms_of<'a>(
        &'a self,
        element: &str,
    ) -> Option<impl Iterator<Item = &'a AtomRecord> + use<'a>> {
        let serials = self.elements.get(element)?;
        Some(serials.iter().filter_map(|serial| self.get(serial)))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

/// The two bond groupings decoded from a `@<TRIPOS>BOND` section.
///
/// For any key the i-th partner in `atoms_bond` pairs with the i-th entry in
/// `bonds_type`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BondTable {
    pub atoms_bond: Groups,
    pub bonds_type: Groups,
    #[serde(skip)]
    records: usize,
}

impl BondTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a bond under `from` only.
    pub fn push(&mut self, from: &str, to: &str, bond_type: &str) {
        self.atoms_bond.push(from, to);
        self.bonds_type.push(from, bond_type);
    }

    /// Marks one more decoded bond line.
    pub(crate) fn count_record(&mut self) {
        self.records += 1;
    }

    /// Number of bond lines decoded, regardless of direction policy.
    #[inline]
    pub fn record_count(&self) -> usize {
        self.records
    }

    /// Partners and bond types of one atom, aligned by position.
    pub fn bonds_of<'a>(
        &'a self,
        serial: &str,
    ) -> impl Iterator<Item = (&'a str, &'a str)> + use<'a> {
        let partners = self.atoms_bond.get(serial).unwrap_or_default();
        let types = self.bonds_type.get(serial).unwrap_or_default();
        partners
            .iter()
            .zip(types)
            .map(|(p, t)| (p.as_str(), t.as_str()))
    }

    /// Every atom serial the groupings mention, as a key or as a partner.
    pub fn referenced_serials(&self) -> impl Iterator<Item = &str> {
        self.atoms_bond.keys().chain(self.atoms_bond.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(serial: &str, name: &str) -> AtomRecord {
        AtomRecord {
            serial: serial.into(),
            name: name.into(),
            coords: [0.0, 0.0, 0.0],
            atom_type: "X".into(),
            subset_id: "1".into(),
            subset_name: "RES".into(),
            charge: "0.0".into(),
        }
    }

    #[test]
    fn insert_groups_serials_by_element() {
        let mut table = AtomTable::new();
        assert!(table.insert(atom("1", "O1")).is_none());
        assert!(table.insert(atom("2", "H1")).is_none());
        assert!(table.insert(atom("3", "H2")).is_none());

        assert_eq!(table.len(), 3);
        assert_eq!(table.element_index().get("H").unwrap(), ["2", "3"]);
        let names: Vec<_> = table.atoms_of("H").unwrap().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["H1", "H2"]);
        assert!(table.atoms_of("N").is_none());
    }

    #[test]
    fn duplicate_serial_moves_between_buckets() {
        let mut table = AtomTable::new();
        table.insert(atom("1", "C1"));
        table.insert(atom("2", "C2"));
        let previous = table.insert(atom("1", "N1")).expect("replaced record");

        assert_eq!(previous.name, "C1");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("1").unwrap().name, "N1");
        assert_eq!(table.element_index().get("C").unwrap(), ["2"]);
        assert_eq!(table.element_index().get("N").unwrap(), ["1"]);
        assert_eq!(table.iter().next().unwrap().name, "N1");
    }

    #[test]
    fn bonds_of_pairs_partner_with_type() {
        let mut bonds = BondTable::new();
        bonds.push("1", "2", "1");
        bonds.push("1", "3", "ar");

        let pairs: Vec<_> = bonds.bonds_of("1").collect();
        assert_eq!(pairs, vec![("2", "1"), ("3", "ar")]);
        assert_eq!(bonds.bonds_of("9").count(), 0);
    }
}
