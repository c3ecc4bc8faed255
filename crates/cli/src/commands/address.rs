//! Address book commands.

use clap::Args;

use maysa_core::{Address, AddressDraft, AddressId};
use maysa_storefront::Storefront;

use super::CommandError;

/// Fields of a shipping address.
#[derive(Debug, Args)]
pub struct AddressArgs {
    /// Short label, e.g. "خانه"
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub full_name: String,

    /// Mobile number, e.g. 09121234567
    #[arg(long)]
    pub phone: String,

    #[arg(long)]
    pub province: String,

    #[arg(long)]
    pub city: String,

    /// Street address
    #[arg(long)]
    pub address: String,

    /// Ten-digit postal code
    #[arg(long)]
    pub postal_code: String,

    /// Make this the default address
    #[arg(long = "default")]
    pub is_default: bool,
}

impl From<AddressArgs> for AddressDraft {
    fn from(args: AddressArgs) -> Self {
        Self {
            title: args.title,
            full_name: args.full_name,
            phone: args.phone,
            province: args.province,
            city: args.city,
            address: args.address,
            postal_code: args.postal_code,
            is_default: args.is_default,
        }
    }
}

pub fn list(shop: &Storefront) {
    let addresses = shop.addresses().addresses();
    if addresses.is_empty() {
        println!("آدرسی ثبت نشده است");
        return;
    }
    for address in addresses {
        print_address(address);
    }
}

/// Validate and save a new address.
pub fn add(shop: &mut Storefront, args: AddressArgs) -> Result<(), CommandError> {
    let draft = AddressDraft::from(args);
    draft.validate()?;
    let id = shop.addresses_mut().add_address(draft);
    println!("آدرس ذخیره شد: {id}");
    Ok(())
}

pub fn update(shop: &mut Storefront, id: &str, args: AddressArgs) -> Result<(), CommandError> {
    let id = existing_id(shop, id)?;
    let draft = AddressDraft::from(args);
    draft.validate()?;
    shop.addresses_mut().update_address(id, draft);
    Ok(())
}

pub fn set_default(shop: &mut Storefront, id: &str) -> Result<(), CommandError> {
    let id = existing_id(shop, id)?;
    shop.addresses_mut().set_default_address(id);
    Ok(())
}

pub fn delete(shop: &mut Storefront, id: &str) -> Result<(), CommandError> {
    let id = existing_id(shop, id)?;
    shop.addresses_mut().delete_address(id);
    Ok(())
}

/// Parse an address ID and check that it is saved.
fn existing_id(shop: &Storefront, raw: &str) -> Result<AddressId, CommandError> {
    let id: AddressId = raw
        .parse()
        .map_err(|_| CommandError::InvalidAddressId(raw.to_owned()))?;
    if shop.addresses().get(id).is_none() {
        return Err(CommandError::AddressNotFound(raw.to_owned()));
    }
    Ok(id)
}

fn print_address(address: &Address) {
    let marker = if address.is_default { " (پیش‌فرض)" } else { "" };
    println!("{}{marker}", address.title);
    println!("  شناسه: {}", address.id);
    println!("  {} - {}", address.full_name, address.phone);
    println!("  {}", address.one_line());
}
