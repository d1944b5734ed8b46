use std::io::{self, BufRead};

use anyhow::Result;
use runbound::postfix;
use runbound::repetition::max_run;

/// Read the next whitespace-delimited token, `None` at end of input.
fn next_token<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut token = String::new();
    loop {
        let buf = input.fill_buf()?;
        if buf.is_empty() {
            return Ok(if token.is_empty() { None } else { Some(token) });
        }
        let mut consumed = 0;
        let mut done = false;
        for &byte in buf {
            if byte.is_ascii_whitespace() {
                consumed += 1;
                if !token.is_empty() {
                    done = true;
                    break;
                }
            } else {
                token.push(byte as char);
                consumed += 1;
            }
        }
        input.consume(consumed);
        if done {
            return Ok(Some(token));
        }
    }
}

fn main() -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let pattern = next_token(&mut input)?.unwrap_or_default();
    let nfa = match postfix::parse(&pattern) {
        Ok(nfa) => nfa,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };

    let target = next_token(&mut input)?
        .and_then(|token| token.chars().next())
        .ok_or_else(|| anyhow::anyhow!("missing target symbol"))?;

    println!("{}", max_run(&nfa, target));
    Ok(())
}
