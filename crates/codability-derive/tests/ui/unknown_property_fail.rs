use codability::CodingKeys;

#[derive(CodingKeys)]
#[coding_keys("aa=Apple")]
struct Person {
    a: String,
    b: u32,
}

fn main() {}
