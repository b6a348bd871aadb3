// SPDX short identifier: Unlicense

use zano_address::{
    AddressKeys,
    PaymentId,
    PublicKey,
    errors::Error,
    config::AddressConfig,
    address::{
        encode_address,
        decode_address,
        encode_integrated_address,
        encode_integrated_address_with_payment_id,
        decode_integrated_address,
        ZanoAddress,
        AddressPrefix,
        ADDRESS_SIZE,
        INTEGRATED_ADDRESS_SIZE,
        MAINNET_ADDRESS_PREFIX,
        MAINNET_INTEGRATED_ADDRESS_PREFIX
    }
};

//12345 * G
const SPEND: &str = "ef4f62f8479733ad879cfaced3c89a9c39dd4fc795ef2efa1c3eafe4d729a081";
//67890 * G
const VIEW: &str = "8c5491d56f8c8ce58d256de0eb2a7dd0c9ab15faf25fba2b1e3ff376b9d70e54";

//tag 0xc5, flag 0x01
const ADDRESS: &str = "ZxDmPioE1oc9eLiNZSHpV5SruxvM319GA8rjfqVg81miTr7N6VdBzR9QZsiGwvjFnZN3Zz7abYTcrY94tKFd2Rdg188v6RfgZ";
//tag 0xc5, flag 0x00
const ADDRESS_ZERO_FLAG: &str = "ZxBZurKQ6ei9eLiNZSHpV5SruxvM319GA8rjfqVg81miTr7N6VdBzR9QZsiGwvjFnZN3Zz7abYTcrY94tKFd2Rdg188s5EsCD";
//tag 0xf8, flag 0x6c, payment id 0102030405060708
const INTEGRATED_ADDRESS: &str = "iZ3FX1tn5rv9eLiNZSHpV5SruxvM319GA8rjfqVg81miTr7N6VdBzR9QZsiGwvjFnZN3Zz7abYTcrY94tKFd2Rdg3Q144X6uxbf14W8ZutWN";
const PAYMENT_ID: &str = "0102030405060708";

fn flip_bit(address: &str, bit: usize) -> String {
    let mut buf = base58_monero::decode(address).unwrap();
    buf[bit / 8] ^= 1 << (bit % 8);
    return base58_monero::encode(&buf).unwrap()
}

#[test]
fn known_vectors() {
    assert_eq!(encode_address(0xc5, 0x01, SPEND, VIEW).unwrap(), ADDRESS);
    assert_eq!(encode_address(0xc5, 0x00, SPEND, VIEW).unwrap(), ADDRESS_ZERO_FLAG);

    let payment_id = PaymentId::from_hex(PAYMENT_ID).unwrap();
    assert_eq!(
        encode_integrated_address_with_payment_id(0xf8, 0x6c, SPEND, VIEW, &payment_id).unwrap(),
        INTEGRATED_ADDRESS
    );

    let keys = decode_address(ADDRESS).unwrap();
    assert_eq!(keys.spend_public_key.to_hex(), SPEND);
    assert_eq!(keys.view_public_key.to_hex(), VIEW);

    let integrated = decode_integrated_address(INTEGRATED_ADDRESS).unwrap();
    assert!(integrated.keys == keys);
    assert_eq!(integrated.payment_id.to_hex(), PAYMENT_ID);
}

#[test]
fn uppercase_hex_is_accepted() {
    let address = encode_address(0xc5, 0x01, &SPEND.to_uppercase(), &VIEW.to_uppercase()).unwrap();
    assert_eq!(address, ADDRESS);
}

#[test]
fn length_invariants() {
    let address = encode_address(0xc5, 0x01, SPEND, VIEW).unwrap();
    assert_eq!(address.len(), 97);
    assert_eq!(base58_monero::decode(&address).unwrap().len(), ADDRESS_SIZE);
    assert_eq!(ADDRESS_SIZE, 70);

    let integrated = encode_integrated_address(0xf8, 0x6c, SPEND, VIEW).unwrap();
    assert_eq!(integrated.len(), 108);
    assert!(integrated.starts_with("iZ"));
    assert_eq!(base58_monero::decode(&integrated).unwrap().len(), INTEGRATED_ADDRESS_SIZE);
    assert_eq!(INTEGRATED_ADDRESS_SIZE, 78);
}

#[test]
fn integrated_addresses_are_unique() {
    let first = encode_integrated_address(0xf8, 0x6c, SPEND, VIEW).unwrap();
    let second = encode_integrated_address(0xf8, 0x6c, SPEND, VIEW).unwrap();
    assert!(first != second);

    let first = decode_integrated_address(&first).unwrap();
    let second = decode_integrated_address(&second).unwrap();
    assert!(first.keys == second.keys);
    assert!(first.payment_id != second.payment_id);
    assert_eq!(first.keys.spend_public_key.to_hex(), SPEND);
    assert_eq!(first.keys.view_public_key.to_hex(), VIEW);
}

#[test]
fn invalid_keys_are_rejected() {
    assert!(matches!(encode_address(0xc5, 0x01, "deadbeef", VIEW), Err(Error::InvalidArgument(_))));
    assert!(matches!(encode_address(0xc5, 0x01, SPEND, "deadbeef"), Err(Error::InvalidArgument(_))));
    assert!(matches!(encode_integrated_address(0xf8, 0x6c, "deadbeef", VIEW), Err(Error::InvalidArgument(_))));

    //right length, not hex
    let not_hex = "zz".repeat(32);
    assert!(matches!(encode_address(0xc5, 0x01, &not_hex, VIEW), Err(Error::InvalidArgument(_))));
    assert!(matches!(encode_integrated_address(0xf8, 0x6c, SPEND, &not_hex), Err(Error::InvalidArgument(_))));

    assert!(matches!(PaymentId::from_hex("0102"), Err(Error::InvalidArgument(_))));
}

#[test]
fn format_is_checked_before_decoding() {
    //too short, too long, wrong leading character, non-alphanumeric
    assert_eq!(decode_address(&ADDRESS[..96]), Err(Error::InvalidFormat));
    assert_eq!(decode_address(&format!("{}1", ADDRESS)), Err(Error::InvalidFormat));
    assert_eq!(decode_address(&format!("X{}", &ADDRESS[1..])), Err(Error::InvalidFormat));
    assert_eq!(decode_address(&format!("{}-", &ADDRESS[..96])), Err(Error::InvalidFormat));
    assert_eq!(decode_address(""), Err(Error::InvalidFormat));

    //each kind only accepts its own shape
    assert_eq!(decode_address(INTEGRATED_ADDRESS), Err(Error::InvalidFormat));
    assert_eq!(decode_integrated_address(ADDRESS), Err(Error::InvalidFormat));
    assert_eq!(decode_integrated_address(&format!("i{}", &INTEGRATED_ADDRESS[..107])), Err(Error::InvalidFormat));

    //alphanumeric, but `0` is not in the Base58 alphabet
    assert_eq!(decode_address(&format!("{}0", &ADDRESS[..96])), Err(Error::InvalidFormat));
}

#[test]
fn checksum_detects_corruption() {
    //bytes past the first block, so the leading characters stay put
    for bit in (8 * 8)..(ADDRESS_SIZE * 8) {
        assert_eq!(decode_address(&flip_bit(ADDRESS, bit)), Err(Error::ChecksumMismatch));
    }
    for bit in (8 * 8)..(INTEGRATED_ADDRESS_SIZE * 8) {
        assert_eq!(decode_integrated_address(&flip_bit(INTEGRATED_ADDRESS, bit)), Err(Error::ChecksumMismatch));
    }
}

#[test]
fn parsed_addresses() {
    let plain: ZanoAddress = ADDRESS.parse().unwrap();
    assert_eq!(plain.prefix(), MAINNET_ADDRESS_PREFIX);
    assert!(plain.payment_id().is_none());
    assert_eq!(plain.to_string(), ADDRESS);

    let integrated: ZanoAddress = INTEGRATED_ADDRESS.parse().unwrap();
    assert_eq!(integrated.prefix(), MAINNET_INTEGRATED_ADDRESS_PREFIX);
    assert_eq!(integrated.payment_id().unwrap().to_hex(), PAYMENT_ID);
    assert!(integrated.keys() == plain.keys());
    assert_eq!(integrated.to_string(), INTEGRATED_ADDRESS);

    let flagless: ZanoAddress = ADDRESS_ZERO_FLAG.parse().unwrap();
    assert_eq!(flagless.prefix(), AddressPrefix::new(0xc5, 0x00));

    assert!(matches!("not an address".parse::<ZanoAddress>(), Err(Error::InvalidFormat)));
}

#[test]
fn config_prefixes() {
    let keys = AddressKeys::new(PublicKey::from_hex(SPEND).unwrap(), PublicKey::from_hex(VIEW).unwrap());
    let config = AddressConfig::default();
    assert!(config == AddressConfig::mainnet());

    assert_eq!(config.encode_address(&keys).unwrap(), ADDRESS);
    let integrated = config.encode_integrated_address(&keys).unwrap();
    assert!(integrated.starts_with("iZ"));

    assert!(config.is_own_network(&ADDRESS.parse().unwrap()));
    assert!(config.is_own_network(&integrated.parse().unwrap()));
    assert!(!config.is_own_network(&ADDRESS_ZERO_FLAG.parse().unwrap()));
}

#[test]
#[cfg(feature = "to_bytes")]
fn key_serialization() {
    use zano_address::{ToBytes, IntegratedAddressKeys};

    let integrated = decode_integrated_address(INTEGRATED_ADDRESS).unwrap();
    let bytes = integrated.to_bytes().unwrap();
    assert!(IntegratedAddressKeys::from_bytes(&bytes).unwrap() == integrated);

    let spend = integrated.keys.spend_public_key;
    assert_eq!(spend.to_bytes().unwrap(), spend.as_bytes().to_vec());
    assert!(PublicKey::from_bytes(&[0u8; 31]).is_err());
}
