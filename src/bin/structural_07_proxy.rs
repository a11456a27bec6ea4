// Proxy: a protection proxy that authenticates a PIN before letting anyone
// near the real bank account.

use colored::Colorize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
enum AccountError {
    #[error("Invalid PIN. Access denied.")]
    InvalidPin,
    #[error("Insufficient funds: balance is {balance}, tried to withdraw {requested}.")]
    InsufficientFunds { balance: u64, requested: u64 },
}

trait BankAccount {
    fn deposit(&mut self, amount: u64) -> Result<(), AccountError>;
    fn withdraw(&mut self, amount: u64) -> Result<(), AccountError>;
    fn balance(&self) -> Result<u64, AccountError>;
}

// =============================================================================
// Real subject
// =============================================================================

#[derive(Default)]
struct RealBankAccount {
    balance: u64,
}

impl BankAccount for RealBankAccount {
    fn deposit(&mut self, amount: u64) -> Result<(), AccountError> {
        self.balance += amount;
        Ok(())
    }

    fn withdraw(&mut self, amount: u64) -> Result<(), AccountError> {
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            });
        }
        self.balance -= amount;
        Ok(())
    }

    fn balance(&self) -> Result<u64, AccountError> {
        Ok(self.balance)
    }
}

// =============================================================================
// Protection proxy
// =============================================================================

struct BankAccountProxy {
    account: RealBankAccount,
    pin: String,
    entered_pin: String,
}

impl BankAccountProxy {
    fn new(pin: &str, entered_pin: &str) -> Self {
        Self {
            account: RealBankAccount::default(),
            pin: pin.to_string(),
            entered_pin: entered_pin.to_string(),
        }
    }

    fn authenticate(&self) -> Result<(), AccountError> {
        if self.pin == self.entered_pin {
            Ok(())
        } else {
            Err(AccountError::InvalidPin)
        }
    }
}

impl BankAccount for BankAccountProxy {
    fn deposit(&mut self, amount: u64) -> Result<(), AccountError> {
        self.authenticate()?;
        self.account.deposit(amount)
    }

    fn withdraw(&mut self, amount: u64) -> Result<(), AccountError> {
        self.authenticate()?;
        self.account.withdraw(amount)
    }

    fn balance(&self) -> Result<u64, AccountError> {
        self.authenticate()?;
        self.account.balance()
    }
}

fn report(outcome: Result<String, AccountError>) {
    match outcome {
        Ok(message) => println!("{}", message.green()),
        Err(err) => println!("{}", err.to_string().red()),
    }
}

fn main() {
    let pin = "1234";

    println!("== Wrong PIN ==");
    let mut account = BankAccountProxy::new(pin, "1111");
    report(account.deposit(100).map(|_| "Deposit successful".to_string()));
    report(account.withdraw(50).map(|_| "Withdrawal successful".to_string()));
    report(account.balance().map(|balance| format!("Balance: {balance}")));

    println!("\n== Correct PIN ==");
    let mut account = BankAccountProxy::new(pin, pin);
    report(account.deposit(100).map(|_| "Deposit successful".to_string()));
    report(account.withdraw(50).map(|_| "Withdrawal successful".to_string()));
    report(account.balance().map(|balance| format!("Balance: {balance}")));

    println!("\n== Overdraw ==");
    report(account.withdraw(500).map(|_| "Withdrawal successful".to_string()));
}
