//! Saved shipping addresses.
//!
//! The address book keeps at most one default address. Every operation that
//! can set a default clears the flag on all other entries in the same pass.

use std::sync::Arc;

use tracing::instrument;

use maysa_core::{Address, AddressDraft, AddressId};

use crate::storage::{KeyValueStore, Persisted, keys};

/// Shipping addresses with a single default.
#[derive(Debug)]
pub struct AddressBook {
    addresses: Vec<Address>,
    bridge: Persisted<Vec<Address>>,
}

impl AddressBook {
    /// Create an empty address book that has not read storage yet.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            addresses: Vec::new(),
            bridge: Persisted::new(store, keys::ADDRESSES),
        }
    }

    /// Create an address book and load it from storage.
    #[must_use]
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        let mut book = Self::new(store);
        book.hydrate();
        book
    }

    /// Replace the in-memory addresses with the stored ones.
    ///
    /// Stored data with several defaults keeps only the first one.
    pub fn hydrate(&mut self) {
        self.addresses = self.bridge.hydrate();
        let mut seen_default = false;
        for address in &mut self.addresses {
            if address.is_default && seen_default {
                address.is_default = false;
            }
            seen_default |= address.is_default;
        }
    }

    /// Save a new address and return its ID.
    ///
    /// The first address, or one marked default, goes to the front and
    /// becomes the only default. Others are appended unchanged.
    #[instrument(skip(self, draft))]
    pub fn add_address(&mut self, draft: AddressDraft) -> AddressId {
        let id = AddressId::generate();
        let make_default = self.addresses.is_empty() || draft.is_default;
        let mut address = Address::from_draft(id, draft);

        if make_default {
            for other in &mut self.addresses {
                other.is_default = false;
            }
            address.is_default = true;
            self.addresses.insert(0, address);
        } else {
            self.addresses.push(address);
        }

        self.bridge.commit(&self.addresses);
        id
    }

    /// Replace the fields of address `id`, keeping its ID and position.
    ///
    /// If the new fields are marked default, every other address loses its
    /// default flag. Unknown IDs are ignored.
    #[instrument(skip(self, draft))]
    pub fn update_address(&mut self, id: AddressId, draft: AddressDraft) {
        let Some(pos) = self.addresses.iter().position(|a| a.id == id) else {
            return;
        };

        if draft.is_default {
            for address in &mut self.addresses {
                address.is_default = false;
            }
        }
        if let Some(slot) = self.addresses.get_mut(pos) {
            *slot = Address::from_draft(id, draft);
        }

        self.bridge.commit(&self.addresses);
    }

    /// Delete address `id`.
    ///
    /// Deleting the default promotes the first remaining address.
    #[instrument(skip(self))]
    pub fn delete_address(&mut self, id: AddressId) {
        let Some(pos) = self.addresses.iter().position(|a| a.id == id) else {
            return;
        };

        let removed = self.addresses.remove(pos);
        if removed.is_default {
            if let Some(first) = self.addresses.first_mut() {
                first.is_default = true;
            }
        }

        self.bridge.commit(&self.addresses);
    }

    /// Make address `id` the only default. Unknown IDs are ignored.
    #[instrument(skip(self))]
    pub fn set_default_address(&mut self, id: AddressId) {
        if !self.addresses.iter().any(|a| a.id == id) {
            return;
        }

        for address in &mut self.addresses {
            address.is_default = address.id == id;
        }

        self.bridge.commit(&self.addresses);
    }

    /// The default address, if any.
    #[must_use]
    pub fn get_default_address(&self) -> Option<&Address> {
        self.addresses.iter().find(|a| a.is_default)
    }

    #[must_use]
    pub fn get(&self, id: AddressId) -> Option<&Address> {
        self.addresses.iter().find(|a| a.id == id)
    }

    #[must_use]
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::commerce::test_support::store;

    fn draft(title: &str, is_default: bool) -> AddressDraft {
        AddressDraft {
            title: title.to_string(),
            full_name: "علی رضایی".to_string(),
            phone: "09351234567".to_string(),
            province: "اصفهان".to_string(),
            city: "اصفهان".to_string(),
            address: "خیابان چهارباغ".to_string(),
            postal_code: "8134567890".to_string(),
            is_default,
        }
    }

    fn default_count(book: &AddressBook) -> usize {
        book.addresses().iter().filter(|a| a.is_default).count()
    }

    fn titles(book: &AddressBook) -> Vec<&str> {
        book.addresses().iter().map(|a| a.title.as_str()).collect()
    }

    #[test]
    fn test_first_address_becomes_default() {
        let mut book = AddressBook::open(store());
        let id = book.add_address(draft("خانه", false));

        assert_eq!(book.get_default_address().unwrap().id, id);
    }

    #[test]
    fn test_non_default_is_appended() {
        let mut book = AddressBook::open(store());
        book.add_address(draft("خانه", false));
        book.add_address(draft("محل کار", false));

        assert_eq!(titles(&book), vec!["خانه", "محل کار"]);
        assert_eq!(book.get_default_address().unwrap().title, "خانه");
    }

    #[test]
    fn test_default_is_prepended_and_exclusive() {
        let mut book = AddressBook::open(store());
        book.add_address(draft("خانه", false));
        book.add_address(draft("محل کار", false));
        let id = book.add_address(draft("ویلا", true));

        assert_eq!(titles(&book), vec!["ویلا", "خانه", "محل کار"]);
        assert_eq!(book.get_default_address().unwrap().id, id);
        assert_eq!(default_count(&book), 1);
    }

    #[test]
    fn test_update_keeps_id_and_clears_other_defaults() {
        let mut book = AddressBook::open(store());
        let home = book.add_address(draft("خانه", false));
        let work = book.add_address(draft("محل کار", false));

        book.update_address(work, draft("دفتر", true));

        assert_eq!(book.get(work).unwrap().title, "دفتر");
        assert_eq!(book.get_default_address().unwrap().id, work);
        assert!(!book.get(home).unwrap().is_default);
        assert_eq!(default_count(&book), 1);
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let mut book = AddressBook::open(store());
        book.add_address(draft("خانه", false));

        book.update_address(AddressId::generate(), draft("x", true));

        assert_eq!(titles(&book), vec!["خانه"]);
        assert_eq!(default_count(&book), 1);
    }

    #[test]
    fn test_delete_default_promotes_first_remaining() {
        let mut book = AddressBook::open(store());
        let home = book.add_address(draft("خانه", false));
        let work = book.add_address(draft("محل کار", false));
        book.add_address(draft("ویلا", false));

        book.delete_address(home);

        assert_eq!(book.get_default_address().unwrap().id, work);
        assert_eq!(default_count(&book), 1);
    }

    #[test]
    fn test_delete_last_address() {
        let mut book = AddressBook::open(store());
        let home = book.add_address(draft("خانه", false));
        book.delete_address(home);

        assert!(book.is_empty());
        assert!(book.get_default_address().is_none());
    }

    #[test]
    fn test_set_default() {
        let mut book = AddressBook::open(store());
        book.add_address(draft("خانه", false));
        let work = book.add_address(draft("محل کار", false));

        book.set_default_address(work);
        assert_eq!(book.get_default_address().unwrap().id, work);
        assert_eq!(default_count(&book), 1);

        book.set_default_address(AddressId::generate());
        assert_eq!(book.get_default_address().unwrap().id, work);
    }

    #[test]
    fn test_single_default_under_mixed_operations() {
        let mut book = AddressBook::open(store());
        let mut ids = Vec::new();
        for i in 0..6 {
            ids.push(book.add_address(draft(&format!("آدرس {i}"), i % 2 == 0)));
            assert!(default_count(&book) <= 1);
        }
        for (i, id) in ids.iter().enumerate() {
            book.update_address(*id, draft("ویرایش", i % 3 == 0));
            assert!(default_count(&book) <= 1);
            book.set_default_address(ids[ids.len() - 1 - i]);
            assert_eq!(default_count(&book), 1);
        }
    }

    #[test]
    fn test_hydrate_repairs_multiple_defaults() {
        let store = store();
        let stored = vec![
            Address::from_draft(AddressId::generate(), draft("a", true)),
            Address::from_draft(AddressId::generate(), draft("b", true)),
        ];
        store
            .set_item(keys::ADDRESSES, &serde_json::to_string(&stored).unwrap())
            .unwrap();

        let book = AddressBook::open(store);
        assert_eq!(default_count(&book), 1);
        assert_eq!(book.get_default_address().unwrap().title, "a");
    }

    #[test]
    fn test_persists_and_reloads() {
        let store = store();
        let mut book = AddressBook::open(store.clone());
        book.add_address(draft("خانه", false));
        book.add_address(draft("محل کار", true));

        let reloaded = AddressBook::open(store);
        assert_eq!(reloaded.addresses(), book.addresses());
    }
}
