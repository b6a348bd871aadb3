// SPDX short identifier: Unlicense

use zano_address::{
    AddressKeys,
    SecretKey,
    config::AddressConfig,
    address::{
        decode_address,
        decode_integrated_address
    },
    derivation::{
        generate_key_derivation,
        derive_stealth_address_hex
    }
};

fn main() {
    //The recipient's wallet keys
    let spend_secret = SecretKey::generate();
    let view_secret = SecretKey::generate();
    let keys = AddressKeys::new(
        spend_secret.to_public().unwrap(),
        view_secret.to_public().unwrap()
    );

    //Publish a mainnet address, and an integrated address for one invoice
    let config = AddressConfig::mainnet();
    let address = config.encode_address(&keys).unwrap();
    let integrated = config.encode_integrated_address(&keys).unwrap();
    println!("address:            {}", address);
    println!("integrated address: {}", integrated);

    //The sender only needs the address
    let recipient = decode_address(&address).unwrap();
    let invoice = decode_integrated_address(&integrated).unwrap();
    assert!(recipient == invoice.keys);
    println!("payment id:         {}", invoice.payment_id);

    //Sender: random transaction key r, derivation 8 * r * A
    let tx_secret = SecretKey::generate();
    let tx_public_key = tx_secret.to_public().unwrap();
    let sender_derivation = generate_key_derivation(&recipient.view_public_key, &tx_secret).unwrap();
    let output_key = sender_derivation.derive_public_key(0, &recipient.spend_public_key).unwrap();

    //Recipient: scans the transaction with the private view key, derivation 8 * a * R
    let scanned = derive_stealth_address_hex(
        &tx_public_key.to_hex(),
        &hex::encode(view_secret.as_bytes()),
        &keys.spend_public_key.to_hex(),
        0
    ).unwrap();
    assert_eq!(scanned, output_key.to_hex());
    println!("output 0 key:       {}", scanned);
}
