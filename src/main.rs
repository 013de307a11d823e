use sample_library::greeting::greeting;
use sample_library::math::checked_factorial;

fn main() {
    greeting();

    println!("\n[Factorials]\n");

    for n in 0..=13 {
        match checked_factorial(n) {
            Some(result) => println!("{n}! = {result}"),
            None => println!("{n}! overflows an i32"),
        }
    }
}
