use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::{env, error::Error};

// We auto-generate unit tests for resolution order over every ordered candidate list
// up to length 3 drawn from a small signature alphabet, duplicates included. This
// makes it much less likely that an error in the scan machinery will go un-caught,
// and it pins first-match-wins for every shape of tie.

/// Parameter-list alphabet for call-by-arguments tests, paired with a matching
/// argument list. Candidates report their own list index as a `u32`.
const PARAMS: &[&str] = &["_: i8", "_: i32", "_: i8, _: i32", ""];
const ARGS: &[&str] = &["0i8", "0i32", "0i8, 0i32", ""];

/// Return-type alphabet for call-by-return-type tests. All candidates accept
/// `(i32,)`, so only the return type can distinguish them; candidate `i` reports
/// itself as the address `i + 1`.
const RETURNS: &[&str] = &["*mut i8", "*mut i32", "*mut f32"];

fn main() -> Result<(), Box<dyn Error>> {
    // Open a file to write to it in the output directory for the build
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("resolution_tests.rs");
    let mut f = File::create(dest_path)?;

    writeln!(f, "// Generated by build.rs; do not edit.")?;
    writeln!(f)?;
    write_dispatch_tests(&mut f)?;
    writeln!(f)?;
    write_dispatch_for_tests(&mut f)?;
    Ok(())
}

/// Every ordered list of length 1..=`max_len` over `0..alphabet`.
fn lists(alphabet: usize, max_len: u32) -> Vec<Vec<usize>> {
    let mut all = Vec::new();
    for len in 1..=max_len {
        for mut code in 0..alphabet.pow(len) {
            let mut list = Vec::with_capacity(len as usize);
            for _ in 0..len {
                list.push(code % alphabet);
                code /= alphabet;
            }
            all.push(list);
        }
    }
    all
}

fn write_dispatch_tests(f: &mut File) -> Result<(), Box<dyn Error>> {
    writeln!(f, "#[test]")?;
    writeln!(f, "fn dispatch_picks_the_first_applicable_candidate() {{")?;
    for list in lists(PARAMS.len(), 3) {
        writeln!(f, "    {{")?;
        for (i, &shape) in list.iter().enumerate() {
            writeln!(f, "        fn c{}({}) -> u32 {{ {} }}", i, PARAMS[shape], i)?;
        }
        let names: Vec<String> = (0..list.len()).map(|i| format!("c{}", i)).collect();
        writeln!(f, "        let selector = crate::overloads![{}];", names.join(", "))?;
        let mut seen = Vec::new();
        for (i, &shape) in list.iter().enumerate() {
            if seen.contains(&shape) {
                continue;
            }
            seen.push(shape);
            if ARGS[shape].is_empty() {
                writeln!(f, "        assert_eq!(crate::dispatch!(selector), {}u32);", i)?;
            } else {
                writeln!(
                    f,
                    "        assert_eq!(crate::dispatch!(selector, {}), {}u32);",
                    ARGS[shape], i
                )?;
            }
        }
        writeln!(f, "    }}")?;
    }
    writeln!(f, "}}")?;
    Ok(())
}

fn write_dispatch_for_tests(f: &mut File) -> Result<(), Box<dyn Error>> {
    writeln!(f, "#[test]")?;
    writeln!(f, "fn dispatch_for_picks_the_first_candidate_with_the_return_type() {{")?;
    for list in lists(RETURNS.len(), 3) {
        writeln!(f, "    {{")?;
        for (i, &ret) in list.iter().enumerate() {
            writeln!(
                f,
                "        fn c{}(_: i32) -> {} {{ {} as {} }}",
                i,
                RETURNS[ret],
                i + 1,
                RETURNS[ret]
            )?;
        }
        let names: Vec<String> = (0..list.len()).map(|i| format!("c{}", i)).collect();
        writeln!(f, "        let selector = crate::overloads![{}];", names.join(", "))?;
        let mut seen = Vec::new();
        for (i, &ret) in list.iter().enumerate() {
            if seen.contains(&ret) {
                continue;
            }
            seen.push(ret);
            writeln!(
                f,
                "        assert_eq!(crate::dispatch_for!({}; selector, 0i32) as usize, {});",
                RETURNS[ret],
                i + 1
            )?;
        }
        writeln!(f, "    }}")?;
    }
    writeln!(f, "}}")?;
    Ok(())
}
