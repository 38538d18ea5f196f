use bus_arrivals::run;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run::run()
}
