//! Walks through a full textbook RSA session: key generation, encryption of
//! a text message, a raw signature, and a key block round trip.
//!
//! Run with `cargo run --example textbook`.

use textbook_rsa::{
    generate_keypair, message, PublicKeyParts, RsaPrivateKey, RsaPublicKey, DEFAULT_KEY_BITS,
};

fn main() -> Result<(), textbook_rsa::Error> {
    let mut rng = rand::thread_rng();

    println!("Generating a {DEFAULT_KEY_BITS}-bit keypair...");
    let (public_key, private_key) = generate_keypair(&mut rng, DEFAULT_KEY_BITS)?;
    println!("n = {}", public_key.n());
    println!("e = {}", public_key.e());

    let text = "Hello, RSA!";
    let m = message::int_from_bytes(text.as_bytes());
    let c = public_key.encrypt(&m)?;
    let decrypted = message::int_to_bytes(&private_key.decrypt(&c)?);
    println!();
    println!("message:    {text}");
    println!("ciphertext: {c}");
    println!("decrypted:  {}", String::from_utf8_lossy(&decrypted));

    let s = private_key.sign(&m)?;
    println!();
    println!("signature:  {s}");
    println!("valid:      {}", public_key.verify(&m, &s)?);
    println!(
        "tampered:   {}",
        public_key.verify(&message::int_from_bytes(b"Hello, RSA?"), &s)?
    );

    let public_block = public_key.to_key_block();
    let private_block = private_key.to_key_block();
    println!();
    println!("{public_block}");

    let restored_public = RsaPublicKey::from_key_block(&public_block)?;
    let restored_private = RsaPrivateKey::from_key_block(&private_block)?;
    println!(
        "key blocks round trip: {}",
        restored_public == public_key && restored_private == private_key
    );

    Ok(())
}
