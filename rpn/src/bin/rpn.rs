use rpn::Expression;

fn convert(input: &str) {
    match Expression::new(input.chars()).result() {
        Err(e) => println!("Parse error: {:?}", e),
        Ok(postfix) => println!("{}", postfix),
    };
}

fn main() {
    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        convert(&input[..]);
    } else {
        let histpath = dirs::home_dir().map(|h| h.join(".rpn_history")).unwrap();
        let mut rl = rustyline::Editor::<()>::new();
        if rl.load_history(&histpath).is_err() {
            println!("No history yet");
        }
        while let Ok(input) = rl.readline(">> ") {
            rl.add_history_entry(input.as_str());
            convert(&input[..]);
        }
        rl.save_history(&histpath).unwrap();
    }
}
