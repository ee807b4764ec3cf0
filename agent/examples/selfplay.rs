use cachex_agent::Agent;
use cachex_types::Player;

fn main() {
    let n = 5;
    let mut red = Agent::with_seed(Player::Red, n, 1);
    let mut blue = Agent::with_seed(Player::Blue, n, 2);
    let mut to_move = Player::Red;

    for turn in 1..(n as u32 * n as u32) {
        let action = match to_move {
            Player::Red => red.action(),
            Player::Blue => blue.action(),
        };
        println!("turn {turn}: {to_move:?} plays {action:?}");
        for agent in [&mut red, &mut blue] {
            if let Err(err) = agent.turn(to_move, &action) {
                println!("referee rejected action: {err}");
                return;
            }
        }
        println!("{:?}", red.board());
        if let Some(winner) = red.winner() {
            println!("{winner:?} wins");
            return;
        }
        to_move = to_move.opponent();
    }
    println!("no spanning chain formed");
}
