use grid_astar::{cell_pos, Editor, GridConfig, GridModel, Outcome, Point};
use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

// A terminal stand-in for the mouse driven front end. Commands, one per line:
//   click <row> <col>    first click places the start, the second the end, later ones walls
//   erase <row> <col>    removes a wall (secondary button)
//   start|end|wall|clear <row> <col>
//   run [frames]         runs the search, printing every n-th step (0 prints only the result)
//   reset                blank board of the same size
//   show                 prints the board
//   quit
//
// Usage: cargo run --example interactive -- [rows cols]

fn parse_point(args: &[&str]) -> Option<Point> {
    match args {
        [row, col] => Some(cell_pos(row.parse().ok()?, col.parse().ok()?)),
        _ => None,
    }
}

fn main() -> io::Result<()> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let config = match args.as_slice() {
        [rows, cols] => GridConfig::new(
            rows.parse().unwrap_or(10),
            cols.parse().unwrap_or(10),
            20,
        ),
        _ => GridConfig::new(10, 20, 20),
    }
    .expect("grid must have at least one cell");
    let mut editor = Editor::new(config).expect("valid configuration");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("> ");
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let words = line.split_whitespace().collect::<Vec<_>>();
        let result = match words.as_slice() {
            [] => Ok(()),
            ["quit"] => break,
            ["show"] => {
                print!("{}", editor.grid());
                Ok(())
            }
            ["reset"] => editor.reset(),
            ["run", rest @ ..] => {
                let every = rest.first().and_then(|n| n.parse::<usize>().ok()).unwrap_or(0);
                let mut step = 0;
                let outcome = editor.run(|grid: &GridModel| {
                    step += 1;
                    if every > 0 && step % every == 0 {
                        println!("step {}\n{}", step, grid);
                    }
                    ControlFlow::Continue(())
                });
                outcome.map(|outcome| {
                    match outcome {
                        Outcome::Found(path) => println!("Found a path of cost {}", path.cost),
                        other => println!("{:?}", other),
                    }
                    print!("{}", editor.grid());
                })
            }
            [command, rest @ ..] => match parse_point(rest) {
                Some(point) => match *command {
                    "click" => editor.click(point).map(|_| ()),
                    "erase" => editor.secondary_click(point).map(|_| ()),
                    "start" => editor.paint_start(point),
                    "end" => editor.paint_end(point),
                    "wall" => editor.paint_wall(point),
                    "clear" => editor.erase(point),
                    _ => {
                        println!("unknown command {}", command);
                        Ok(())
                    }
                },
                None => {
                    println!("expected <row> <col>");
                    Ok(())
                }
            },
        };
        if let Err(e) = result {
            println!("error: {}", e);
        }
        print!("> ");
        stdout.flush()?;
    }
    Ok(())
}
