use codability::CodingKeys;

#[derive(CodingKeys)]
#[coding_keys("a=b")]
struct Person {
    a: String,
    b: u32,
}

fn main() {}
