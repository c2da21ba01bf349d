mod cli_bump;
mod cli_publish;
