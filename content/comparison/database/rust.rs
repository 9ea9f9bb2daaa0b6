use rusqlite::Connection;

fn main() -> rusqlite::Result<()> {
    let conn = Connection::open("app.db")?;
    
    let mut stmt = conn.prepare("SELECT * FROM users WHERE age > ?1")?;
    let users = stmt.query_map([18], |row| {
        // ... map row to struct
    })?;
    
    Ok(())
}
