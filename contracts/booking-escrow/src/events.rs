use soroban_sdk::{symbol_short, Address, Env, String};

pub fn initialized(env: &Env, owner: &Address, token: &Address, period: u64) {
    env.events().publish(
        (symbol_short!("init"),),
        (owner.clone(), token.clone(), period),
    );
}

/// `Booked(buyer, seller, amount, id)`; the id rides in the topics so
/// indexers can filter on it.
pub fn booked(env: &Env, booking_id: &String, buyer: &Address, seller: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("booked"), booking_id.clone()),
        (buyer.clone(), seller.clone(), amount),
    );
}

pub fn cancelled(env: &Env, booking_id: &String, buyer: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("cancel"), booking_id.clone()),
        (buyer.clone(), amount),
    );
}

pub fn period_changed(env: &Env, old: u64, new: u64) {
    env.events().publish((symbol_short!("period"),), (old, new));
}

pub fn owner_changed(env: &Env, old: &Address, new: &Address) {
    env.events()
        .publish((symbol_short!("owner"),), (old.clone(), new.clone()));
}
