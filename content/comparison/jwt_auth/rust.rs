use jsonwebtoken::{encode, decode, Header, Validation, EncodingKey, DecodingKey};
use bcrypt::{hash, verify};

let token = encode(&Header::default(), 
    &Claims { user_id: 123 }, 
    &EncodingKey::from_secret(b"secret"))?;
    
let payload = decode::<Claims>(&token, 
    &DecodingKey::from_secret(b"secret"),
    &Validation::default())?;
    
let hashed = hash("password", 10)?;
let valid = verify("password", &hashed)?;
